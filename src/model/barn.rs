//! Barn entity and the deterministic barn naming scheme.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Identity assigned to a barn by the store.
pub type BarnId = u64;

/// A barn housing animals of a single color.
///
/// Capacity is fixed for the barn's lifetime and uniform across all barns
/// of a color; the store stamps it from configuration at creation time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barn {
    /// Store-assigned identity.
    pub id: BarnId,
    /// Name used for disambiguation and deterministic ordering.
    pub name: String,
    /// Color of the animals this barn houses.
    pub color: Color,
    /// Maximum number of animals this barn can hold. Always >= 1.
    pub capacity: u32,
}

/// Deterministic barn name for a color and running ordinal.
///
/// Names sort consistently for a given ordinal sequence, which makes the
/// set of barns retained during a shrink reproducible.
///
/// # Examples
///
/// ```
/// use farm_distributor::model::{barn_name, Color};
///
/// assert_eq!(barn_name(Color::Red, 0), "Barn RED 0");
/// assert_eq!(barn_name(Color::Blue, 12), "Barn BLUE 12");
/// ```
pub fn barn_name(color: Color, ordinal: usize) -> String {
    format!("Barn {} {}", color.as_upper(), ordinal)
}
