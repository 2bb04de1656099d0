//! Uniform random playouts.

use crate::board::BoardState;
use crate::core::{Action, ActionRecord, GameRng, Player};
use crate::error::ActionError;

use super::game::QuoridorGame;

/// Outcome of one playout.
#[derive(Clone, Debug)]
pub struct PlayoutResult {
    /// `None` when the ply limit was hit first.
    pub winner: Option<Player>,
    pub plies: u32,
    pub walls_placed: u32,
    pub history: Vec<ActionRecord>,
    /// Every state visited, starting position included; one longer than
    /// `history`.
    pub states: Vec<BoardState>,
    pub final_state: BoardState,
}

/// Play uniformly random legal actions from the start position until a pawn
/// reaches its goal row or `max_plies` actions have been taken.
pub fn random_playout(
    game: &QuoridorGame,
    rng: &mut GameRng,
    max_plies: u32,
) -> Result<PlayoutResult, ActionError> {
    random_playout_from(game, game.initial_state(), rng, max_plies)
}

/// `random_playout` starting from an arbitrary state.
pub fn random_playout_from(
    game: &QuoridorGame,
    mut state: BoardState,
    rng: &mut GameRng,
    max_plies: u32,
) -> Result<PlayoutResult, ActionError> {
    let mut history = Vec::new();
    let mut states = vec![state.clone()];
    let mut plies = 0;
    let mut walls_placed = 0;

    while game.winner(&state).is_none() && plies < max_plies {
        let legal: Vec<usize> = game.legal_action_mask(&state).legal_indices().collect();
        let Some(&index) = rng.choose(&legal) else {
            break;
        };

        let action = Action::from_index(index)?;
        history.push(ActionRecord::new(state.current_player(), action, plies));
        if action.is_wall() {
            walls_placed += 1;
        }
        state = game.next_state(&state, action)?;
        states.push(state.clone());
        plies += 1;
    }

    Ok(PlayoutResult {
        winner: game.winner(&state),
        plies,
        walls_placed,
        history,
        states,
        final_state: state,
    })
}
