//! Error types for the distributor.
//!
//! Two of these are invariant faults: they mean the sizing logic produced
//! an inconsistent plan, and the only correct response is to abort the
//! whole rebalance. Everything else is a storage failure passing through.

use thiserror::Error;

use crate::store::StoreError;

/// Error type for rebalance operations.
#[derive(Error, Debug)]
pub enum DistributorError {
    /// A barn would receive more animals than its capacity. Indicates a
    /// sizing defect; unreachable when the plan is computed correctly.
    #[error("barn {barn:?} would exceed capacity {capacity} with {assigned} animals")]
    OverCapacityFault {
        barn: String,
        capacity: u32,
        assigned: usize,
    },

    /// A retained barn ended the rebalance with no animals. Indicates an
    /// assignment defect; unreachable while any animals exist.
    #[error("barn {barn:?} was retained but holds no animals")]
    EmptyBarnFault { barn: String },

    /// Storage failure, propagated unchanged.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl DistributorError {
    /// True for invariant faults, as opposed to collaborator failures.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            DistributorError::OverCapacityFault { .. } | DistributorError::EmptyBarnFault { .. }
        )
    }
}

/// Result type alias for distributor operations.
pub type Result<T> = std::result::Result<T, DistributorError>;
