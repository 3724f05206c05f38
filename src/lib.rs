//! farm-distributor library crate
//!
//! Groups animals into color-matched barns and keeps each color's
//! distribution balanced: the minimum number of barns, none empty, none
//! over capacity, occupancies differing by at most one.
//!
//! The pieces, front to back:
//! - [`model`]: the Animal/Barn/Color data model
//! - [`store`]: the storage capability ([`store::FarmStore`]) and the
//!   in-memory reference backend
//! - [`distributor`]: the rebalance core (sizing math, planner, and the
//!   executing rebalancer)
//! - [`service`]: add/remove use cases with per-color serialization
//! - [`config`]: barn capacity configuration

pub mod config;
pub mod distributor;
pub mod model;
pub mod service;
pub mod store;

pub use config::{ConfigError, FarmConfig};
pub use distributor::{Distributor, DistributorError, RebalanceOutcome};
pub use model::{Animal, AnimalId, Barn, BarnId, Color};
pub use service::{FarmError, FarmService};
pub use store::{FarmStore, InMemoryStore, StoreError};
