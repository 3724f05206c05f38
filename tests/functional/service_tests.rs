//! Full farm flows through the service layer.
//!
//! These mirror real usage: animals arrive and leave one at a time across
//! every color, and the whole-farm invariant check runs after each flow.

use std::sync::Arc;

use farm_distributor::config::FarmConfig;
use farm_distributor::model::AnimalId;
use farm_distributor::service::FarmService;
use farm_distributor::store::{FarmStore, InMemoryStore};

use crate::fixtures::{assert_farm_invariants, mixed_herd};

const ANIMAL_SEED: usize = 1000;

fn service(capacity: u32) -> FarmService<InMemoryStore> {
    FarmService::new(Arc::new(InMemoryStore::new(
        FarmConfig::new().with_barn_capacity(capacity),
    )))
}

#[tokio::test]
async fn test_add_animals_to_farm() {
    let service = service(20);
    service.add_animals(mixed_herd(ANIMAL_SEED)).await.unwrap();

    assert_farm_invariants(service.store().as_ref(), ANIMAL_SEED).await;
}

#[tokio::test]
async fn test_remove_animals_from_farm() {
    let service = service(20);
    service.add_animals(mixed_herd(ANIMAL_SEED)).await.unwrap();

    // Remove a deterministic half: every other animal.
    let animals = service.animals().await.unwrap();
    let to_remove: Vec<AnimalId> = animals
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(_, a)| a.id)
        .collect();
    service.remove_animals(&to_remove).await.unwrap();

    assert_farm_invariants(service.store().as_ref(), animals.len() - to_remove.len()).await;
}

#[tokio::test]
async fn test_add_animals_to_farm_large_herd() {
    let service = service(20);
    let herd = mixed_herd(ANIMAL_SEED * 3);
    let expected = herd.len();
    service.add_animals(herd).await.unwrap();

    assert_farm_invariants(service.store().as_ref(), expected).await;
}

#[tokio::test]
async fn test_interleaved_add_and_remove() {
    let service = service(5);
    let mut live: Vec<AnimalId> = Vec::new();

    // Alternate bursts of arrivals with departures from the front.
    for round in 0..8 {
        for (name, color) in mixed_herd(25) {
            let animal = service.add_animal(&name, color).await.unwrap();
            live.push(animal.id);
        }
        for _ in 0..(round * 2) {
            if let Some(id) = live.first().copied() {
                live.remove(0);
                service.remove_animal(id).await.unwrap();
            }
        }
        assert_farm_invariants(service.store().as_ref(), live.len()).await;
    }
}

#[tokio::test]
async fn test_delete_all_leaves_nothing_behind() {
    let service = service(20);
    service.add_animals(mixed_herd(50)).await.unwrap();

    service.delete_all().await.unwrap();
    assert!(service.animals().await.unwrap().is_empty());
    assert!(service.store().all_barns().await.unwrap().is_empty());
    assert_farm_invariants(service.store().as_ref(), 0).await;
}

#[tokio::test]
async fn test_empty_herd_never_creates_barns() {
    let service = service(20);
    assert!(service.store().all_barns().await.unwrap().is_empty());
    assert_farm_invariants(service.store().as_ref(), 0).await;
}
