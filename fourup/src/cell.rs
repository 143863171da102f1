use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The state of a single cell on the [board](crate::Board).
///
/// Serialized as its display symbol, see [`Cell::symbol()`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    #[serde(rename = "")]
    Empty = 0,
    /// The first player.
    #[serde(rename = "R")]
    Red = 1,
    /// The second player.
    #[serde(rename = "B")]
    Black = 2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The symbol used for this cell in a [`StringBoard`](crate::StringBoard).
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Red => "R",
            Cell::Black => "B",
        }
    }

    /// Converts from the integer encoding used by [`RawBoard`](crate::RawBoard).
    ///
    /// Returns `None` for values outside of `0..=2`.
    pub fn from_raw(value: i64) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Red),
            2 => Some(Cell::Black),
            _ => None,
        }
    }

    pub fn to_raw(self) -> i64 {
        self as i64
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            _ => write!(f, "{}", self.symbol()),
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Cell`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidPlayer(pub String);

impl std::error::Error for InvalidPlayer {}

impl std::fmt::Display for InvalidPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' is not a player, expected R or B", self.0)
    }
}

/// Parses a player color, `R` or `B` in either case.
///
/// The empty cell has no textual player form and is rejected.
impl FromStr for Cell {
    type Err = InvalidPlayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" | "r" => Ok(Cell::Red),
            "B" | "b" => Ok(Cell::Black),
            _ => Err(InvalidPlayer(String::from(s))),
        }
    }
}
