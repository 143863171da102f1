use crate::{Board, NUM_COLUMNS};

/// Draws the board as a box of `.`, `R` and `B` with column numbers on top.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::from("   ");
    for column in 0..NUM_COLUMNS {
        result += &format!(" {}", column);
    }
    result += "\n  ╭";
    for _ in 0..NUM_COLUMNS {
        result += "──";
    }
    result += "─╮\n";
    for row in board.cells() {
        result += "  │";
        for cell in row {
            result += &format!(" {}", cell);
        }
        result += " │\n";
    }
    result += "  ╰";
    for _ in 0..NUM_COLUMNS {
        result += "──";
    }
    result += "─╯";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
