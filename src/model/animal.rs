//! Animal entity.

use serde::{Deserialize, Serialize};

use super::barn::BarnId;
use super::color::Color;

/// Identity assigned to an animal by the store.
pub type AnimalId = u64;

/// An animal living on the farm.
///
/// The favorite color is fixed at creation and decides which barns the
/// animal may be housed in. The barn reference is owned by the distributor:
/// nothing else assigns or clears it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Store-assigned identity.
    pub id: AnimalId,
    /// Display name, not required to be unique.
    pub name: String,
    /// Grouping attribute; immutable once set.
    pub favorite_color: Color,
    /// Barn currently housing this animal, `None` while unassigned.
    pub barn_id: Option<BarnId>,
}

impl Animal {
    /// True if the animal is currently housed in some barn.
    pub fn is_assigned(&self) -> bool {
        self.barn_id.is_some()
    }
}
