//! Coat colors recognized by the farm.
//!
//! A color is the grouping attribute for barn assignment: an animal only
//! ever lives in a barn of its own favorite color.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coat color shared by animals and barns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Brown,
    White,
    Black,
}

/// Error returned when parsing an unknown color name.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown color: {0}")]
pub struct ParseColorError(pub String);

impl Color {
    /// All color variants, in declaration order.
    ///
    /// Used for lock-table indexing and for generating mixed herds in tests.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Brown,
        Color::White,
        Color::Black,
    ];

    /// Stable ordinal of this color within [`Color::ALL`].
    pub fn ordinal(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Brown => 4,
            Color::White => 5,
            Color::Black => 6,
        }
    }

    /// Uppercase name as used in barn names (`"Barn RED 0"`).
    pub fn as_upper(self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Blue => "BLUE",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Brown => "BROWN",
            Color::White => "WHITE",
            Color::Black => "BLACK",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Brown => "brown",
            Color::White => "white",
            Color::Black => "black",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "brown" => Ok(Color::Brown),
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            other => Err(ParseColorError(other.to_string())),
        }
    }
}
