use serde::{Deserialize, Serialize};

use crate::{Cell, NUM_COLUMNS, NUM_ROWS};

/// The board projected to display symbols, see [`Cell::symbol()`].
///
/// Indexed as `[row][column]`, with row 0 at the top.
pub type StringBoard = [[&'static str; NUM_COLUMNS]; NUM_ROWS];

/// A board as a grid of integers, which is how boards are exchanged with
/// other programs.
///
/// `0` is an empty cell, `1` is [`Cell::Red`] and `2` is [`Cell::Black`].
/// In JSON, this is an array of rows, top row first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBoard(pub [[i64; NUM_COLUMNS]; NUM_ROWS]);

impl RawBoard {
    /// Projects every cell to its display symbol.
    ///
    /// Panics if any value is not a valid cell. Such a board is corrupt and
    /// there is no symbol that could stand in for it.
    pub fn to_string_board(&self) -> StringBoard {
        let mut string_board = [[""; NUM_COLUMNS]; NUM_ROWS];
        for (row, values) in self.0.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                match Cell::from_raw(value) {
                    Some(cell) => string_board[row][column] = cell.symbol(),
                    None => panic!(
                        "invalid value {} for a board at row {}, column {}",
                        value, row, column
                    ),
                }
            }
        }
        string_board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_raw_board() {
        let mut raw = RawBoard::default();
        raw.0[5][0] = 1;
        raw.0[5][1] = 2;
        let strings = raw.to_string_board();
        assert_eq!(strings[5][0], "R");
        assert_eq!(strings[5][1], "B");
        assert_eq!(strings[0][0], "");
    }

    #[test]
    #[should_panic(expected = "invalid value 3 for a board")]
    fn corrupt_raw_board_aborts() {
        let mut raw = RawBoard::default();
        raw.0[2][4] = 3;
        raw.to_string_board();
    }

    #[test]
    fn json_layout() {
        let raw: RawBoard = serde_json::from_str(
            "[[0,0,0,0,0,0,0],[0,0,0,0,0,0,0],[0,0,0,0,0,0,0],\
              [0,0,0,0,0,0,0],[0,0,0,0,0,0,0],[1,0,0,2,0,0,0]]",
        )
        .unwrap();
        assert_eq!(raw.0[5][0], 1);
        assert_eq!(raw.0[5][3], 2);
        assert!(serde_json::from_str::<RawBoard>("[[0,0,0]]").is_err());
    }
}
