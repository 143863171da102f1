//! Move application and four-in-a-row detection for a 6 x 7 Connect Four board.
//!
//! The central type is [`Board`]. Everything is synchronous and allocation-free
//! apart from [`visualize_board()`].

pub use board::*;
pub use cell::*;
pub use errors::*;
pub use protocol_types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod cell;
mod errors;
mod protocol_types;
mod visualization;
