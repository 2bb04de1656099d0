//! Structured error types.
//!
//! Only caller mistakes are reported as values. Broken engine invariants
//! (removing an absent edge, a commit that cuts a pawn off from its goal)
//! panic instead.

use std::path::PathBuf;

use crate::core::{Action, Player};

/// A rejected action: a precondition the caller should have checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("action index {0} is outside the action space [0, 208]")]
    IndexOutOfRange(usize),

    #[error("{player} has no walls remaining")]
    NoWallsRemaining { player: Player },

    #[error("{action} is not legal for {player}")]
    IllegalAction { player: Player, action: Action },

    #[error("game is already won by {winner}")]
    GameOver { winner: Player },
}

/// A board vector that does not describe a valid position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VectorError {
    #[error("board vector has length {actual}, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("{player} wall count {value} is outside [0, {max}]")]
    WallCount { player: Player, value: i32, max: u8 },

    #[error("{player} pawn at ({x}, {y}) is off the board")]
    PawnOffBoard { player: Player, x: i32, y: i32 },

    #[error("both pawns occupy ({x}, {y})")]
    SharedCell { x: u8, y: u8 },

    #[error("wall slot {index} has code {code}, expected 0, 1 or 2")]
    WallCode { index: usize, code: i32 },

    #[error("wall in slot {index} overlaps another wall")]
    OverlappingWall { index: usize },

    #[error("{player} cannot reach its goal row")]
    Unreachable { player: Player },

    #[error("both pawns stand on their goal rows")]
    BothOnGoal,

    #[error("{placed} walls placed plus {remaining} in stock exceeds the budget of {max}")]
    WallBudget {
        placed: usize,
        remaining: usize,
        max: usize,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
