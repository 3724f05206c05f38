//! Farm service: the add/remove-animal use cases.
//!
//! Composes the store and the distributor. Every mutation of a color's
//! herd runs under that color's lock so the following rebalance executes
//! as one serialized unit; callers on other colors proceed concurrently.

pub mod lock;

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use crate::distributor::{Distributor, DistributorError};
use crate::model::{Animal, AnimalId, Color};
use crate::store::{FarmStore, StoreError};

pub use lock::ColorLocks;

/// Error type for farm service operations.
#[derive(Error, Debug)]
pub enum FarmError {
    /// The rebalance following a mutation failed.
    #[error("rebalance failed: {0}")]
    Distributor(#[from] DistributorError),

    /// Storage failure while mutating records.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for farm service operations.
pub type Result<T> = std::result::Result<T, FarmError>;

/// Application-facing farm operations.
///
/// Owns the per-color locks; the distributor itself stays lock-free and
/// relies on this layer for same-color serialization.
pub struct FarmService<S> {
    store: Arc<S>,
    distributor: Distributor<S>,
    locks: ColorLocks,
}

impl<S: FarmStore> FarmService<S> {
    /// Create a service over the given store.
    pub fn new(store: Arc<S>) -> Self {
        let distributor = Distributor::new(Arc::clone(&store));
        Self {
            store,
            distributor,
            locks: ColorLocks::new(),
        }
    }

    /// The store this service mutates. Exposed for verification in tests.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Add one animal and rebalance its color.
    ///
    /// Returns the stored record, including the barn it was housed in.
    #[instrument(skip(self), fields(color = %color))]
    pub async fn add_animal(&self, name: &str, color: Color) -> Result<Animal> {
        let _guard = self.locks.acquire(color).await;
        let animal = self.store.create_animal(name, color).await?;
        self.distributor.rebalance(color).await?;
        Ok(self.store.animal(animal.id).await?)
    }

    /// Add a batch of animals, one at a time.
    ///
    /// Each addition rebalances its color before the next is processed,
    /// so the farm is consistent after every step.
    pub async fn add_animals(
        &self,
        animals: impl IntoIterator<Item = (String, Color)>,
    ) -> Result<Vec<Animal>> {
        let mut added = Vec::new();
        for (name, color) in animals {
            added.push(self.add_animal(&name, color).await?);
        }
        Ok(added)
    }

    /// Remove one animal and rebalance its color.
    #[instrument(skip(self))]
    pub async fn remove_animal(&self, animal_id: AnimalId) -> Result<()> {
        // Favorite color is immutable, so reading it before taking the
        // lock cannot race with another mutation of the same animal.
        let animal = self.store.animal(animal_id).await?;
        let color = animal.favorite_color;

        let _guard = self.locks.acquire(color).await;
        self.store.delete_animal(animal_id).await?;
        self.distributor.rebalance(color).await?;
        Ok(())
    }

    /// Remove a batch of animals, one at a time.
    pub async fn remove_animals(&self, animal_ids: &[AnimalId]) -> Result<()> {
        for animal_id in animal_ids {
            self.remove_animal(*animal_id).await?;
        }
        Ok(())
    }

    /// Every animal on the farm.
    pub async fn animals(&self) -> Result<Vec<Animal>> {
        Ok(self.store.all_animals().await?)
    }

    /// Remove every animal and barn.
    pub async fn delete_all(&self) -> Result<()> {
        Ok(self.store.delete_all().await?)
    }
}
