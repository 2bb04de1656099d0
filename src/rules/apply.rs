//! Committing actions.
//!
//! `apply` checks the one action it is given (never a whole mask), then
//! returns the successor state. The acting player is passed in and the turn
//! marker is left alone.

use tracing::debug;

use crate::board::BoardState;
use crate::core::{Action, Player};
use crate::error::ActionError;

use super::movegen::valid_pawn_moves;
use super::walls::is_legal_wall;
use super::win::winner;

/// Validate `action` for `player` and return the resulting state.
///
/// On error `state` is untouched and no successor is built.
///
/// Panics in debug builds if the committed state breaks goal reachability;
/// that can only follow from a wall validation bug.
pub fn apply(state: &BoardState, player: Player, action: Action) -> Result<BoardState, ActionError> {
    if let Some(winner) = winner(state) {
        return Err(ActionError::GameOver { winner });
    }

    let legal = match action {
        Action::Move(to) => valid_pawn_moves(state, player).contains(&to),
        Action::Wall { cell, orientation } => {
            if state.walls_remaining(player) == 0 {
                return Err(ActionError::NoWallsRemaining { player });
            }
            is_legal_wall(state, player, cell, orientation)
        }
    };
    if !legal {
        return Err(ActionError::IllegalAction { player, action });
    }

    let mut next = state.clone();
    match action {
        Action::Move(to) => next.move_pawn(player, to),
        Action::Wall { cell, orientation } => next.place_wall(player, cell, orientation),
    }
    debug!(%player, %action, index = action.index(), "action committed");

    debug_assert!(
        next.reachability_holds(),
        "{action} by {player} cut a pawn off from its goal row"
    );
    Ok(next)
}

/// `apply` for a raw action index.
pub fn apply_index(
    state: &BoardState,
    player: Player,
    index: usize,
) -> Result<BoardState, ActionError> {
    apply(state, player, Action::from_index(index)?)
}
