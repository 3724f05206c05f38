//! Test fixtures: herd generation and whole-farm invariant checks.

use std::collections::HashMap;

use farm_distributor::distributor::distribution::barns_needed;
use farm_distributor::model::{BarnId, Color};
use farm_distributor::store::FarmStore;

/// Deterministic animal name for an ordinal.
pub fn animal_name(ordinal: usize) -> String {
    format!("Animal {}", ordinal)
}

/// A herd of `count` animals cycling through every color.
///
/// Deterministic by construction, so failures reproduce exactly.
pub fn mixed_herd(count: usize) -> Vec<(String, Color)> {
    (0..count)
        .map(|i| (animal_name(i), Color::ALL[i % Color::ALL.len()]))
        .collect()
}

/// Verify every distribution invariant across the whole farm.
///
/// For each color: every animal is housed in exactly one barn of its own
/// color, no barn is empty or over capacity, the barn count is minimal,
/// and per-barn occupancy differs by at most one.
pub async fn assert_farm_invariants<S: FarmStore>(store: &S, expected_animals: usize) {
    let animals = store.all_animals().await.expect("fetch animals");
    let barns = store.all_barns().await.expect("fetch barns");
    assert_eq!(
        animals.len(),
        expected_animals,
        "animal mutations should reflect in persisted records"
    );

    let barn_by_id: HashMap<BarnId, _> = barns.iter().map(|b| (b.id, b)).collect();
    let mut occupancy: HashMap<BarnId, usize> = HashMap::new();

    for animal in &animals {
        let barn_id = animal
            .barn_id
            .unwrap_or_else(|| panic!("animal {} left unassigned", animal.id));
        let barn = barn_by_id
            .get(&barn_id)
            .unwrap_or_else(|| panic!("animal {} housed in missing barn {}", animal.id, barn_id));
        assert_eq!(
            barn.color, animal.favorite_color,
            "animal {} housed in a barn of the wrong color",
            animal.id
        );
        *occupancy.entry(barn_id).or_default() += 1;
    }

    for barn in &barns {
        let housed = occupancy.get(&barn.id).copied().unwrap_or(0);
        assert!(housed > 0, "barn {:?} is empty", barn.name);
        assert!(
            housed <= barn.capacity as usize,
            "barn {:?} over capacity: {} > {}",
            barn.name,
            housed,
            barn.capacity
        );
    }

    for color in Color::ALL {
        let herd: Vec<_> = animals
            .iter()
            .filter(|a| a.favorite_color == color)
            .collect();
        let color_barns: Vec<_> = barns.iter().filter(|b| b.color == color).collect();

        if herd.is_empty() {
            assert!(
                color_barns.is_empty(),
                "{} has no animals but {} barns",
                color,
                color_barns.len()
            );
            continue;
        }

        let capacity = color_barns
            .first()
            .map(|b| b.capacity as usize)
            .expect("non-empty herd must have barns");
        assert_eq!(
            color_barns.len(),
            barns_needed(herd.len(), capacity),
            "{} barn count is not minimal for {} animals",
            color,
            herd.len()
        );

        let counts: Vec<usize> = color_barns
            .iter()
            .map(|b| occupancy.get(&b.id).copied().unwrap_or(0))
            .collect();
        let max = counts.iter().max().copied().unwrap_or(0);
        let min = counts.iter().min().copied().unwrap_or(0);
        assert!(
            max - min <= 1,
            "{} distribution uneven: {:?}",
            color,
            counts
        );
    }
}
