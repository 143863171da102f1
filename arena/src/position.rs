use std::path::Path;

use anyhow::Context;
use fourup::{Board, RawBoard};

/// Reads a starting board from a JSON file, see [`parse_board()`].
pub fn load_board(path: &Path) -> anyhow::Result<Board> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read board file '{}'", path.display()))?;
    parse_board(&json).with_context(|| format!("Invalid board in '{}'", path.display()))
}

/// Parses a [`RawBoard`] from JSON: six rows of seven integers, top row first,
/// where 0 is empty, 1 is red and 2 is black.
pub fn parse_board(json: &str) -> anyhow::Result<Board> {
    let raw: RawBoard = serde_json::from_str(json)?;
    let board = Board::from_raw(&raw)?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use fourup::Cell;

    use super::*;

    #[test]
    fn parse_valid_board() {
        let board = parse_board(
            "[[0,0,0,0,0,0,0],
              [0,0,0,0,0,0,0],
              [0,0,0,0,0,0,0],
              [0,0,0,0,0,0,0],
              [0,0,0,2,0,0,0],
              [0,0,1,1,0,0,0]]",
        )
        .unwrap();
        assert_eq!(board.get(5, 2), Cell::Red);
        assert_eq!(board.get(4, 3), Cell::Black);
        assert!(!board.game_over());
    }

    #[test]
    fn reject_malformed_boards() {
        let err = parse_board("[[0,0,0,0,0,0,0]]").unwrap_err();
        assert!(err.downcast_ref::<serde_json::Error>().is_some());

        let err = parse_board(
            "[[0,0,0,0,0,0,0],
              [0,0,0,0,0,0,0],
              [0,0,0,0,0,0,0],
              [0,0,0,0,0,0,0],
              [0,0,0,0,0,0,0],
              [0,0,5,0,0,0,0]]",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value 5 for a board at row 5, column 2"
        );
    }

    #[test]
    fn missing_file() {
        let err = load_board(Path::new("/nonexistent/board.json")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not read board file '/nonexistent/board.json'"
        );
    }
}
