/// The error type for [`Board::apply_move()`](crate::Board::apply_move).
///
/// A failed move never modifies the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The column index is outside of `0..NUM_COLUMNS`.
    InvalidMove { column: i32 },
    /// There is no empty cell left in the column.
    ColumnFull { column: i32 },
}

impl IllegalMove {
    pub fn column(&self) -> i32 {
        match *self {
            IllegalMove::InvalidMove { column } | IllegalMove::ColumnFull { column } => column,
        }
    }
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::InvalidMove { column } => write!(f, "Move {} is invalid", column),
            IllegalMove::ColumnFull { column } => {
                write!(f, "No room in column {} for a move", column)
            }
        }
    }
}

/// The error type for [`Board::from_raw()`](crate::Board::from_raw).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidCell {
    pub row: usize,
    pub column: usize,
    pub value: i64,
}

impl std::error::Error for InvalidCell {}

impl std::fmt::Display for InvalidCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid value {} for a board at row {}, column {}",
            self.value, self.row, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            IllegalMove::InvalidMove { column: -1 }.to_string(),
            "Move -1 is invalid"
        );
        assert_eq!(
            IllegalMove::ColumnFull { column: 4 }.to_string(),
            "No room in column 4 for a move"
        );
        assert_eq!(
            InvalidCell {
                row: 2,
                column: 5,
                value: 7
            }
            .to_string(),
            "Invalid value 7 for a board at row 2, column 5"
        );
    }

    #[test]
    fn column_accessor() {
        assert_eq!(IllegalMove::InvalidMove { column: 7 }.column(), 7);
        assert_eq!(IllegalMove::ColumnFull { column: 0 }.column(), 0);
    }
}
