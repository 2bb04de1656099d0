//! Two-player Quoridor on a 9x9 board.
//!
//! - Each player starts mid base row with 10 walls
//! - On your turn: move your pawn or place a wall
//! - A wall may never cut either pawn off from its goal row
//! - First pawn to reach the far row wins

mod game;
mod playout;

pub use game::QuoridorGame;
pub use playout::{random_playout, random_playout_from, PlayoutResult};
