use std::str::FromStr;

use fourup::{Board, Cell, IllegalMove, InvalidPlayer, StringBoard};
use serde::Serialize;
use tracing::{debug, info, warn};

/// A piece dropped by a given player into a given column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerMove {
    pub player: Cell,
    pub column: i32,
}

impl std::fmt::Display for PlayerMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.player.symbol(), self.column)
    }
}

/// The error type for the [`FromStr`] instance of [`PlayerMove`].
#[derive(Debug)]
pub enum ParseMoveError {
    Empty,
    InvalidPlayer(InvalidPlayer),
    InvalidColumn(String),
}

impl std::error::Error for ParseMoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseMoveError::InvalidPlayer(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMoveError::Empty => write!(f, "Empty move, expected e.g. R3"),
            ParseMoveError::InvalidPlayer(_) => write!(f, "Move must start with R or B"),
            ParseMoveError::InvalidColumn(column) => {
                write!(f, "'{}' is not a column number", column)
            }
        }
    }
}

/// Parses moves like `R3` or `b0`: the player, then the column.
///
/// The column is not range-checked here, that is up to the board.
impl FromStr for PlayerMove {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let player_char = chars.next().ok_or(ParseMoveError::Empty)?;
        let player = Cell::from_str(player_char.encode_utf8(&mut [0; 4]))
            .map_err(ParseMoveError::InvalidPlayer)?;
        let rest = chars.as_str();
        let column = rest
            .parse::<i32>()
            .map_err(|_| ParseMoveError::InvalidColumn(String::from(rest)))?;
        Ok(PlayerMove { player, column })
    }
}

/// How a sequence of moves ended.
///
/// Move indices are zero-based positions in the move list. They are `None`
/// when the starting board was already finished.
#[derive(Debug, PartialEq, Eq)]
pub enum GameResult {
    FourInARow {
        completed_by: Option<(usize, PlayerMove)>,
    },
    Draw {
        move_idx: Option<usize>,
    },
    /// All moves were applied and the game can go on.
    Unfinished,
    /// The board is left as it was before this move.
    IllegalMove {
        move_idx: usize,
        player_move: PlayerMove,
        err: IllegalMove,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    FourInARow,
    Draw,
    Unfinished,
    IllegalMove,
}

impl GameResult {
    pub fn kind(&self) -> ResultKind {
        match self {
            GameResult::FourInARow { .. } => ResultKind::FourInARow,
            GameResult::Draw { .. } => ResultKind::Draw,
            GameResult::Unfinished => ResultKind::Unfinished,
            GameResult::IllegalMove { .. } => ResultKind::IllegalMove,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameResult::FourInARow { .. } | GameResult::Draw { .. }
        )
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::FourInARow {
                completed_by: Some((move_idx, player_move)),
            } => write!(
                f,
                "Four in a row, completed by {} with move #{}",
                player_move,
                move_idx + 1
            ),
            GameResult::FourInARow { completed_by: None } => {
                write!(f, "The starting board already has four in a row")
            }
            GameResult::Draw {
                move_idx: Some(move_idx),
            } => write!(f, "Draw, the board filled up with move #{}", move_idx + 1),
            GameResult::Draw { move_idx: None } => {
                write!(f, "Draw, the starting board is already full")
            }
            GameResult::Unfinished => write!(f, "No four in a row yet and the board has room"),
            GameResult::IllegalMove {
                move_idx,
                player_move,
                err,
            } => write!(f, "Move #{} ({}) is illegal: {}", move_idx + 1, player_move, err),
        }
    }
}

/// What gets printed as JSON at the end.
#[derive(Debug, Serialize)]
pub struct Report {
    pub result: ResultKind,
    pub board: StringBoard,
}

impl Report {
    pub fn new(result: &GameResult, board: &Board) -> Self {
        Self {
            result: result.kind(),
            board: board.string_board(),
        }
    }
}

fn terminal_result(
    board: &Board,
    move_idx: Option<usize>,
    last_move: Option<PlayerMove>,
) -> Option<GameResult> {
    if board.game_over() {
        Some(GameResult::FourInARow {
            completed_by: move_idx.zip(last_move),
        })
    } else if board.is_full() {
        Some(GameResult::Draw { move_idx })
    } else {
        None
    }
}

/// Applies the moves in order until the game is over or a move is illegal.
///
/// Moves are taken as given: nothing checks that players alternate. Moves
/// left over after the game has ended are not applied.
pub fn play_moves(board: &mut Board, moves: &[PlayerMove]) -> GameResult {
    let mut result = terminal_result(board, None, None);

    let mut applied = 0;
    for (move_idx, &player_move) in moves.iter().enumerate() {
        if result.is_some() {
            break;
        }
        match board.apply_move(player_move.column, player_move.player) {
            Ok(row) => {
                debug!(move_idx, %player_move, row, "Applied move");
                applied += 1;
            }
            Err(err) => {
                info!(move_idx, %player_move, %err, "Illegal move");
                return GameResult::IllegalMove {
                    move_idx,
                    player_move,
                    err,
                };
            }
        }
        result = terminal_result(board, Some(move_idx), Some(player_move));
    }

    if moves.len() > applied && result.is_some() {
        warn!(
            ignored = moves.len() - applied,
            "Game already over, ignoring remaining moves"
        );
    }
    result.unwrap_or(GameResult::Unfinished)
}
