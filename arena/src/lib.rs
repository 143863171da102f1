mod game;
mod position;
pub use game::*;
pub use position::*;
