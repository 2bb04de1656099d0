//! Core value types: positions, wall slots, players, actions, RNG,
//! configuration.
//!
//! Everything here is plain data with no rules knowledge; the board and
//! rules modules build on it.

pub mod action;
pub mod config;
pub mod player;
pub mod position;
pub mod rng;
pub mod wall;

pub use action::{
    Action, ActionMask, ActionRecord, ACTION_SPACE, HORIZONTAL_WALL_OFFSET, PAWN_ACTIONS,
    VERTICAL_WALL_OFFSET,
};
pub use config::{EngineConfig, MAX_WALLS_PER_PLAYER};
pub use player::{Player, PlayerMap};
pub use position::{Direction, Position, BOARD_SIZE, CELL_COUNT};
pub use rng::GameRng;
pub use wall::{Edge, Orientation, WallCell, WALL_GRID_SIZE, WALL_SLOT_COUNT};
