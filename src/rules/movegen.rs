//! Pawn move generation.
//!
//! For each direction with an open edge: an empty neighbour is a legal
//! destination; an opponent there is jumped straight over when the edge
//! beyond is open, otherwise sideways to either diagonal the walls allow.

use smallvec::SmallVec;

use crate::board::BoardState;
use crate::core::{Direction, Player, Position};

/// Destinations for one pawn. Three plain steps plus two diagonals is the
/// most any position allows.
pub type PawnMoves = SmallVec<[Position; 5]>;

/// Legal destinations for `player`'s pawn.
#[must_use]
pub fn valid_pawn_moves(state: &BoardState, player: Player) -> PawnMoves {
    let graph = state.graph();
    let from = state.position(player);
    let opponent = state.position(player.other());
    let mut moves = PawnMoves::new();

    for dir in Direction::ALL {
        if !graph.has_edge_toward(from, dir) {
            continue;
        }
        let Some(next) = from.step(dir) else {
            continue;
        };
        if next != opponent {
            moves.push(next);
            continue;
        }

        if graph.has_edge_toward(opponent, dir) {
            if let Some(beyond) = opponent.step(dir) {
                moves.push(beyond);
            }
            continue;
        }
        for side in dir.orthogonal() {
            if graph.has_edge_toward(opponent, side) {
                if let Some(diagonal) = opponent.step(side) {
                    moves.push(diagonal);
                }
            }
        }
    }
    moves
}
