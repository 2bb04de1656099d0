//! Board representation: adjacency graph, wall grid, and the full state.
//!
//! ## Key Types
//!
//! - `AdjacencyGraph`: 9x9 cell graph, edges only ever removed
//! - `WallGrid`: 8x8 grid of placed wall orientations
//! - `BoardState`: pawns, wall stocks, walls, graph, and the turn marker

pub mod graph;
pub mod state;
pub mod walls;

pub use graph::{AdjacencyGraph, FULL_EDGE_COUNT};
pub use state::{BoardState, PlayerState};
pub use walls::WallGrid;
