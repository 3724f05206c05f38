//! Per-color operation locks.
//!
//! Rebalances of the same color race on barn counts, so every mutation of
//! a color's herd must hold that color's lock for the full
//! mutate-then-rebalance pair. Distinct colors touch disjoint records and
//! run concurrently without coordination.

use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::model::Color;

/// One mutex per [`Color`] variant.
pub struct ColorLocks {
    locks: [Mutex<()>; Color::ALL.len()],
}

impl ColorLocks {
    /// Create an unlocked table.
    pub fn new() -> Self {
        Self {
            locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }

    /// Acquire the lock for a color, waiting if another operation on the
    /// same color is in flight.
    pub async fn acquire(&self, color: Color) -> MutexGuard<'_, ()> {
        let guard = self.locks[color.ordinal()].lock().await;
        debug!(color = %color, "color lock acquired");
        guard
    }
}

impl Default for ColorLocks {
    fn default() -> Self {
        Self::new()
    }
}
