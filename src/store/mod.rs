//! Storage capability for farm records.
//!
//! The distributor and the farm service never talk to a concrete database;
//! they go through [`FarmStore`], which owns every persisted record. Any
//! backend satisfying the operation contract works; the crate ships
//! [`InMemoryStore`] as the reference implementation.
//!
//! Semantics the contract requires:
//! - `create_*` persists immediately and returns the record with its
//!   assigned identity (and, for barns, the configured capacity).
//! - `save_animal` persists an updated barn reference for an existing
//!   animal.
//! - Find operations return records in a stable order for unchanged data,
//!   so a redundant rebalance sees the same input sequence.

pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{Animal, AnimalId, Barn, BarnId, Color};

pub use memory::InMemoryStore;

/// Errors surfaced by a storage backend.
///
/// These propagate unchanged through the distributor; the core neither
/// retries nor reinterprets them.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("animal {0} not found")]
    AnimalNotFound(AnimalId),

    #[error("barn {0} not found")]
    BarnNotFound(BarnId),
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage capability consumed by the distributor and the farm service.
#[async_trait]
pub trait FarmStore: Send + Sync {
    /// All barns of a color, in creation order.
    async fn barns_by_color(&self, color: Color) -> Result<Vec<Barn>>;

    /// All animals whose favorite color matches, in creation order.
    async fn animals_by_color(&self, color: Color) -> Result<Vec<Animal>>;

    /// All animals currently housed in a barn.
    async fn animals_by_barn(&self, barn_id: BarnId) -> Result<Vec<Animal>>;

    /// Persist a new barn; the store assigns identity and capacity.
    async fn create_barn(&self, name: &str, color: Color) -> Result<Barn>;

    /// Delete one barn.
    async fn delete_barn(&self, barn_id: BarnId) -> Result<()>;

    /// Delete a batch of barns.
    async fn delete_barns(&self, barn_ids: &[BarnId]) -> Result<()>;

    /// Persist an updated barn reference for an existing animal.
    async fn save_animal(&self, animal: &Animal) -> Result<()>;

    /// Persist a new animal, unassigned; the store assigns identity.
    async fn create_animal(&self, name: &str, favorite_color: Color) -> Result<Animal>;

    /// Delete one animal.
    async fn delete_animal(&self, animal_id: AnimalId) -> Result<()>;

    /// Fetch one animal by identity.
    async fn animal(&self, animal_id: AnimalId) -> Result<Animal>;

    /// Every animal on the farm, in creation order.
    async fn all_animals(&self) -> Result<Vec<Animal>>;

    /// Every barn on the farm, in creation order.
    async fn all_barns(&self) -> Result<Vec<Barn>>;

    /// Remove every record. Test teardown convenience.
    async fn delete_all(&self) -> Result<()>;
}
