//! Rules engine trait.
//!
//! The seam between the board engine and search collaborators:
//! - What actions are legal
//! - How actions modify state
//! - Win conditions

use crate::board::BoardState;
use crate::core::{Action, ActionMask, Player};
use crate::error::ActionError;

/// Rules engine trait.
///
/// Search calls these during gameplay and tree expansion.
///
/// ## Implementation Notes
///
/// - `legal_action_mask`: all-zero if the player cannot act
/// - `apply_action`: must be deterministic and must not flip the turn
/// - `winner`: `None` while the game continues
pub trait RulesEngine {
    /// Binary mask of the actions `player` may take in `state`.
    fn legal_action_mask(&self, state: &BoardState, player: Player) -> ActionMask;

    /// Apply an action, returning the successor state.
    ///
    /// Must be deterministic for search consistency.
    fn apply_action(
        &self,
        state: &BoardState,
        player: Player,
        action: Action,
    ) -> Result<BoardState, ActionError>;

    /// The winner, if the game is over.
    fn winner(&self, state: &BoardState) -> Option<Player>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for a player, in index order.
    fn legal_actions(&self, state: &BoardState, player: Player) -> Vec<Action> {
        self.legal_action_mask(state, player)
            .legal_indices()
            .filter_map(|i| Action::from_index(i).ok())
            .collect()
    }

    /// Is the game over?
    fn is_terminal(&self, state: &BoardState) -> bool {
        self.winner(state).is_some()
    }
}
