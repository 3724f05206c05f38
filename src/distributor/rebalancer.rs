//! Rebalance execution against the store.
//!
//! The [`Distributor`] is the one entry point the rest of the application
//! calls: after any change to a color's herd, `rebalance(color)` reconciles
//! that color's barns and assignments back to the balanced shape. Sizing
//! and retention decisions come from the pure planner; this module only
//! executes them and enforces the two invariant checks.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::model::{barn_name, BarnId, Color};
use crate::store::FarmStore;

use super::distribution::barn_index;
use super::error::{DistributorError, Result};
use super::planner::{plan_rebalance, RebalancePlan};

/// Summary of one completed rebalance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebalanceOutcome {
    /// Barns of the color after the rebalance.
    pub barns: usize,
    /// Animals of the color after the rebalance.
    pub animals: usize,
    /// Barns created during this call (seed barn included).
    pub barns_created: usize,
    /// Barns deleted during this call.
    pub barns_removed: usize,
}

/// Reconciles one color's barn population and animal assignments.
///
/// Stateless between calls: every rebalance re-reads the store, so the
/// operation is safe to repeat and safe to call redundantly. Callers are
/// responsible for serializing rebalances of the *same* color; see
/// [`crate::service::ColorLocks`].
pub struct Distributor<S> {
    store: Arc<S>,
}

impl<S> Clone for Distributor<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: FarmStore> Distributor<S> {
    /// Create a distributor over the given store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Rebalance all animals of `color` across the minimum number of barns.
    ///
    /// Postconditions when this returns `Ok`:
    /// - barn count is `ceil(animals / capacity)` (zero for an empty herd);
    /// - every barn holds between 1 and capacity animals;
    /// - per-barn occupancy differs by at most 1;
    /// - every animal of the color is assigned to exactly one barn of it.
    ///
    /// The two fault variants of [`DistributorError`] signal an
    /// inconsistent plan and abort the operation; they are not expected
    /// runtime states.
    #[instrument(skip(self), fields(color = %color))]
    pub async fn rebalance(&self, color: Color) -> Result<RebalanceOutcome> {
        let mut barns = self.store.barns_by_color(color).await?;
        let mut animals = self.store.animals_by_color(color).await?;

        // Empty herd: no barns may remain for the color.
        if animals.is_empty() {
            let ids: Vec<BarnId> = barns.iter().map(|b| b.id).collect();
            if !ids.is_empty() {
                self.store.delete_barns(&ids).await?;
            }
            info!(barns_removed = ids.len(), "herd empty, cleared barns");
            return Ok(RebalanceOutcome {
                barns_removed: ids.len(),
                ..RebalanceOutcome::default()
            });
        }

        // Capacity is configuration owned by the store; the running system
        // discovers it off a created barn. With no barns yet, the seed barn
        // is both the capacity source and the first assignment target.
        let mut seed_created = 0;
        let capacity = match barns.first() {
            Some(barn) => barn.capacity,
            None => {
                let seed = self.store.create_barn(&barn_name(color, 0), color).await?;
                debug!(barn = %seed.name, capacity = seed.capacity, "created seed barn");
                let capacity = seed.capacity;
                barns.push(seed);
                seed_created = 1;
                capacity
            }
        };

        let plan = plan_rebalance(&barns, color, animals.len(), capacity as usize);
        debug!(
            needed = plan.needed,
            keep = plan.keep.len(),
            create = plan.create.len(),
            remove = plan.remove.len(),
            "computed rebalance plan"
        );

        let RebalancePlan {
            keep: mut targets,
            create,
            remove,
            needed: _,
        } = plan;

        let mut barns_created = seed_created;
        for name in &create {
            targets.push(self.store.create_barn(name, color).await?);
            barns_created += 1;
        }

        // Clear every barn reference before reassigning so no stale
        // assignment can be double counted.
        for animal in &mut animals {
            animal.barn_id = None;
            self.store.save_animal(animal).await?;
        }

        let target_count = targets.len();
        let mut occupancy = vec![0usize; target_count];
        for (ordinal, animal) in animals.iter_mut().enumerate() {
            let slot = barn_index(ordinal, target_count);
            let barn = &targets[slot];

            if occupancy[slot] + 1 > capacity as usize {
                return Err(DistributorError::OverCapacityFault {
                    barn: barn.name.clone(),
                    capacity,
                    assigned: occupancy[slot] + 1,
                });
            }
            occupancy[slot] += 1;

            animal.barn_id = Some(barn.id);
            self.store.save_animal(animal).await?;
        }

        if !remove.is_empty() {
            let ids: Vec<BarnId> = remove.iter().map(|b| b.id).collect();
            self.store.delete_barns(&ids).await?;
        }

        // Every retained barn must have ended up with at least one animal.
        for barn in &targets {
            if self.store.animals_by_barn(barn.id).await?.is_empty() {
                return Err(DistributorError::EmptyBarnFault {
                    barn: barn.name.clone(),
                });
            }
        }

        let outcome = RebalanceOutcome {
            barns: target_count,
            animals: animals.len(),
            barns_created,
            barns_removed: remove.len(),
        };
        info!(
            barns = outcome.barns,
            animals = outcome.animals,
            created = outcome.barns_created,
            removed = outcome.barns_removed,
            "rebalance complete"
        );
        Ok(outcome)
    }
}
