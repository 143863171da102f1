use serde::{Deserialize, Serialize};

use crate::{Cell, IllegalMove, InvalidCell, RawBoard, StringBoard};

pub const NUM_ROWS: usize = 6;
pub const NUM_COLUMNS: usize = 7;
/// How many cells of one color in a line end the game.
pub const NUM_CONSECUTIVE: usize = 4;

type Cells = [[Cell; NUM_COLUMNS]; NUM_ROWS];

/// A Connect Four board.
///
/// Row 0 is the top row, which is the last one to fill up. Pieces fall to
/// the lowest empty cell of a column, so within a column all pieces are
/// stacked contiguously from the bottom row. Only [`Board::apply_move()`]
/// places pieces, which is what upholds this.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "RawBoard", try_from = "RawBoard")]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; NUM_COLUMNS]; NUM_ROWS],
        }
    }

    /// Creates a board from its integer encoding.
    ///
    /// Fails on the first value that is not a valid cell. This does not check
    /// that the pieces obey gravity.
    pub fn from_raw(raw: &RawBoard) -> Result<Self, InvalidCell> {
        let mut board = Self::new();
        for (row, values) in raw.0.iter().enumerate() {
            for (column, &value) in values.iter().enumerate() {
                board.cells[row][column] =
                    Cell::from_raw(value).ok_or(InvalidCell { row, column, value })?;
            }
        }
        Ok(board)
    }

    pub fn to_raw(&self) -> RawBoard {
        RawBoard(self.cells.map(|row| row.map(Cell::to_raw)))
    }

    /// The cell at the given coordinates.
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// All cells, indexed by `[row][column]`.
    pub fn cells(&self) -> &[[Cell; NUM_COLUMNS]; NUM_ROWS] {
        &self.cells
    }

    /// Whether the column has no room for another piece.
    ///
    /// Panics if the column is out of bounds.
    pub fn is_column_full(&self, column: usize) -> bool {
        !self.cells[0][column].is_empty()
    }

    /// Drops a piece for `player` into `column` and returns the row it landed on.
    ///
    /// The piece lands on the lowest empty cell of the column. On error, the
    /// board is left exactly as it was and can still be used.
    ///
    /// This does not check whose turn it is, or that `player` is not
    /// [`Cell::Empty`].
    pub fn apply_move(&mut self, column: i32, player: Cell) -> Result<usize, IllegalMove> {
        let col = usize::try_from(column)
            .ok()
            .filter(|&col| col < NUM_COLUMNS)
            .ok_or(IllegalMove::InvalidMove { column })?;
        for row in (0..NUM_ROWS).rev() {
            if self.cells[row][col].is_empty() {
                self.cells[row][col] = player;
                return Ok(row);
            }
        }
        Err(IllegalMove::ColumnFull { column })
    }

    /// Whether no more pieces can be placed.
    ///
    /// Only the top row is checked, since it is always the last to fill up.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Whether there are four pieces of one color in a row, vertically,
    /// horizontally or diagonally.
    ///
    /// A game has ended when this is true or the board [is full](Self::is_full).
    pub fn game_over(&self) -> bool {
        (0..NUM_COLUMNS).any(|column| vertical_win(&self.cells, column))
            || (0..NUM_ROWS).any(|row| horizontal_win(&self.cells, row))
            || southeast_diagonal_win(&self.cells)
            || southwest_diagonal_win(&self.cells)
    }

    /// Projects every cell to its display symbol, see [`Cell::symbol()`].
    pub fn string_board(&self) -> StringBoard {
        self.cells.map(|row| row.map(Cell::symbol))
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> RawBoard {
        board.to_raw()
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidCell;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_raw(&raw)
    }
}

// Checks for NUM_CONSECUTIVE equal, non-empty cells starting at (row, column)
// and advancing by (d_row, d_column). Lines leaving the board don't count.
fn line_from(cells: &Cells, row: usize, column: usize, d_row: isize, d_column: isize) -> bool {
    let first = cells[row][column];
    if first.is_empty() {
        return false;
    }
    (1..NUM_CONSECUTIVE as isize).all(|k| {
        let cell = row
            .checked_add_signed(k * d_row)
            .zip(column.checked_add_signed(k * d_column))
            .and_then(|(r, c)| cells.get(r)?.get(c));
        cell == Some(&first)
    })
}

// Row varies, column does not.
fn vertical_win(cells: &Cells, column: usize) -> bool {
    (0..=NUM_ROWS - NUM_CONSECUTIVE).any(|row| line_from(cells, row, column, 1, 0))
}

fn horizontal_win(cells: &Cells, row: usize) -> bool {
    (0..=NUM_COLUMNS - NUM_CONSECUTIVE).any(|column| line_from(cells, row, column, 0, 1))
}

// Down and to the right.
fn southeast_diagonal_win(cells: &Cells) -> bool {
    (0..=NUM_ROWS - NUM_CONSECUTIVE).any(|row| {
        (0..=NUM_COLUMNS - NUM_CONSECUTIVE).any(|column| line_from(cells, row, column, 1, 1))
    })
}

// Down and to the left.
fn southwest_diagonal_win(cells: &Cells) -> bool {
    (0..=NUM_ROWS - NUM_CONSECUTIVE).any(|row| {
        (NUM_COLUMNS - NUM_CONSECUTIVE..NUM_COLUMNS)
            .any(|column| line_from(cells, row, column, 1, -1))
    })
}
