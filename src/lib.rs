//! # quoridor-engine
//!
//! A Quoridor rules engine for estimator-guided search and training.
//!
//! ## Design Principles
//!
//! 1. **Reachability Is Sacred**: Every committed state keeps both pawns
//!    able to reach their goal rows. Wall legality exists to preserve it.
//!
//! 2. **Explicit Turns**: The rules never flip the turn on their own; the
//!    game facade hands it over after each committed action.
//!
//! 3. **Read-Only Trials**: Wall candidates are checked against an
//!    immutable overlay of the committed graph, so a full legal-action mask
//!    can be computed in parallel.
//!
//! ## Architecture
//!
//! - **Action Space**: 209 flat indices: 81 pawn destinations, then 64
//!   horizontal and 64 vertical wall slots.
//!
//! - **Board Vector**: 70 integers (wall counts, pawn coordinates, wall
//!   grid), with a canonical view for the second player.
//!
//! ## Modules
//!
//! - `core`: Positions, wall slots, players, actions, RNG, configuration
//! - `board`: Adjacency graph, wall grid, board state
//! - `rules`: Move generation, wall legality, commits, win detection
//! - `nn`: Board vector codec, symmetries, estimator traits
//! - `games`: The Quoridor facade and random playouts
//! - `error`: Error types

pub mod core;
pub mod board;
pub mod rules;
pub mod nn;
pub mod games;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionMask, ActionRecord,
    Player, PlayerMap, Position, Direction,
    Orientation, WallCell,
    GameRng,
    EngineConfig,
    ACTION_SPACE,
};

pub use crate::board::{AdjacencyGraph, BoardState, PlayerState, WallGrid};

pub use crate::rules::{
    apply, is_legal_wall, valid_pawn_moves, winner,
    QuoridorRules, RulesEngine,
};

pub use crate::nn::{
    canonical, decode, encode, BoardVector, BOARD_VECTOR_LEN,
    CanonicalEncoder, EncodedState, PolicyValueNetwork, StateEncoder,
};

pub use crate::games::quoridor::{random_playout, PlayoutResult, QuoridorGame};

pub use crate::error::{ActionError, ConfigError, VectorError};
