//! In-memory storage backend.
//!
//! Keeps every record in `BTreeMap`s behind a single `RwLock`. Identities
//! are assigned from a monotonically increasing counter, so iteration in
//! key order is creation order, the stable fetch order the store contract
//! asks for.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::FarmConfig;
use crate::model::{Animal, AnimalId, Barn, BarnId, Color};

use super::{FarmStore, Result, StoreError};

#[derive(Debug, Default)]
struct Records {
    animals: BTreeMap<AnimalId, Animal>,
    barns: BTreeMap<BarnId, Barn>,
    next_id: u64,
}

impl Records {
    fn assign_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Reference [`FarmStore`] backed by in-process maps.
///
/// Barn capacity is stamped from the [`FarmConfig`] the store was built
/// with; the rest of the system only ever sees it on created barns.
#[derive(Debug)]
pub struct InMemoryStore {
    config: FarmConfig,
    records: RwLock<Records>,
}

impl InMemoryStore {
    /// Create a store with the given configuration.
    pub fn new(config: FarmConfig) -> Self {
        Self {
            config,
            records: RwLock::new(Records::default()),
        }
    }

    /// The configuration this store stamps onto new barns.
    pub fn config(&self) -> &FarmConfig {
        &self.config
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(FarmConfig::default())
    }
}

#[async_trait]
impl FarmStore for InMemoryStore {
    async fn barns_by_color(&self, color: Color) -> Result<Vec<Barn>> {
        let records = self.records.read().await;
        Ok(records
            .barns
            .values()
            .filter(|b| b.color == color)
            .cloned()
            .collect())
    }

    async fn animals_by_color(&self, color: Color) -> Result<Vec<Animal>> {
        let records = self.records.read().await;
        Ok(records
            .animals
            .values()
            .filter(|a| a.favorite_color == color)
            .cloned()
            .collect())
    }

    async fn animals_by_barn(&self, barn_id: BarnId) -> Result<Vec<Animal>> {
        let records = self.records.read().await;
        Ok(records
            .animals
            .values()
            .filter(|a| a.barn_id == Some(barn_id))
            .cloned()
            .collect())
    }

    async fn create_barn(&self, name: &str, color: Color) -> Result<Barn> {
        let mut records = self.records.write().await;
        let id = records.assign_id();
        let barn = Barn {
            id,
            name: name.to_string(),
            color,
            capacity: self.config.barn_capacity,
        };
        records.barns.insert(id, barn.clone());
        Ok(barn)
    }

    async fn delete_barn(&self, barn_id: BarnId) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .barns
            .remove(&barn_id)
            .map(|_| ())
            .ok_or(StoreError::BarnNotFound(barn_id))
    }

    async fn delete_barns(&self, barn_ids: &[BarnId]) -> Result<()> {
        let mut records = self.records.write().await;
        for barn_id in barn_ids {
            records
                .barns
                .remove(barn_id)
                .ok_or(StoreError::BarnNotFound(*barn_id))?;
        }
        Ok(())
    }

    async fn save_animal(&self, animal: &Animal) -> Result<()> {
        let mut records = self.records.write().await;
        match records.animals.get_mut(&animal.id) {
            Some(existing) => {
                *existing = animal.clone();
                Ok(())
            }
            None => Err(StoreError::AnimalNotFound(animal.id)),
        }
    }

    async fn create_animal(&self, name: &str, favorite_color: Color) -> Result<Animal> {
        let mut records = self.records.write().await;
        let id = records.assign_id();
        let animal = Animal {
            id,
            name: name.to_string(),
            favorite_color,
            barn_id: None,
        };
        records.animals.insert(id, animal.clone());
        Ok(animal)
    }

    async fn delete_animal(&self, animal_id: AnimalId) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .animals
            .remove(&animal_id)
            .map(|_| ())
            .ok_or(StoreError::AnimalNotFound(animal_id))
    }

    async fn animal(&self, animal_id: AnimalId) -> Result<Animal> {
        let records = self.records.read().await;
        records
            .animals
            .get(&animal_id)
            .cloned()
            .ok_or(StoreError::AnimalNotFound(animal_id))
    }

    async fn all_animals(&self) -> Result<Vec<Animal>> {
        let records = self.records.read().await;
        Ok(records.animals.values().cloned().collect())
    }

    async fn all_barns(&self) -> Result<Vec<Barn>> {
        let records = self.records.read().await;
        Ok(records.barns.values().cloned().collect())
    }

    async fn delete_all(&self) -> Result<()> {
        let mut records = self.records.write().await;
        records.animals.clear();
        records.barns.clear();
        Ok(())
    }
}
