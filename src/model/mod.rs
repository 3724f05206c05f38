//! Farm data model: animals, barns, and the color that groups them.

pub mod animal;
pub mod barn;
pub mod color;

pub use animal::{Animal, AnimalId};
pub use barn::{barn_name, Barn, BarnId};
pub use color::{Color, ParseColorError};
