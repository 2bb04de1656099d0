//! Quoridor rules: move generation, wall legality, commits, win detection.
//!
//! `RulesEngine` is the interface search collaborators program against;
//! `QuoridorRules` implements it on top of the free functions below, which
//! are also usable directly.

pub mod apply;
pub mod engine;
pub mod movegen;
pub mod quoridor;
pub mod walls;
pub mod win;

pub use apply::{apply, apply_index};
pub use engine::RulesEngine;
pub use movegen::{valid_pawn_moves, PawnMoves};
pub use quoridor::QuoridorRules;
pub use walls::{check_wall, fill_wall_mask, is_legal_wall, wall_preconditions, WallRejection};
pub use win::{winner, winner_sign};
