//! The Quoridor rules.

use crate::board::BoardState;
use crate::core::{Action, ActionMask, EngineConfig, Player};
use crate::error::ActionError;

use super::apply::apply;
use super::engine::RulesEngine;
use super::movegen::valid_pawn_moves;
use super::walls::fill_wall_mask;
use super::win::winner;

/// Standard two-player Quoridor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuoridorRules {
    /// Check wall candidates on the rayon pool.
    pub parallel_walls: bool,
}

impl QuoridorRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            parallel_walls: config.parallel_walls,
        }
    }
}

impl RulesEngine for QuoridorRules {
    fn legal_action_mask(&self, state: &BoardState, player: Player) -> ActionMask {
        let mut mask = ActionMask::empty();
        if winner(state).is_some() {
            return mask;
        }
        for to in valid_pawn_moves(state, player) {
            mask.allow(Action::Move(to).index());
        }
        fill_wall_mask(state, player, self.parallel_walls, &mut mask);
        mask
    }

    fn apply_action(
        &self,
        state: &BoardState,
        player: Player,
        action: Action,
    ) -> Result<BoardState, ActionError> {
        apply(state, player, action)
    }

    fn winner(&self, state: &BoardState) -> Option<Player> {
        winner(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Position, PAWN_ACTIONS};

    #[test]
    fn test_initial_mask() {
        let rules = QuoridorRules::new();
        let state = BoardState::initial(&EngineConfig::default());
        let mask = rules.legal_action_mask(&state, Player::One);

        assert_eq!(mask.count(), 3 + 128);
        for pos in [Position::new(3, 0), Position::new(5, 0), Position::new(4, 1)] {
            assert!(mask.allows(Action::Move(pos)));
        }
        assert_eq!(mask.count() - mask.wall_count(), 3);
    }

    #[test]
    fn test_legal_actions_agree_with_mask() {
        let rules = QuoridorRules::new();
        let state = BoardState::initial(&EngineConfig::default());
        let actions = rules.legal_actions(&state, Player::Two);

        assert_eq!(actions.len(), 131);
        assert!(actions.iter().take(3).all(|a| a.index() < PAWN_ACTIONS));
        assert!(actions.windows(2).all(|w| w[0].index() < w[1].index()));
    }

    #[test]
    fn test_terminal_state_has_empty_mask() {
        let rules = QuoridorRules::new();
        let mut state = BoardState::initial(&EngineConfig::default());
        state.move_pawn(Player::Two, Position::new(4, 0));
        state.move_pawn(Player::One, Position::new(4, 4));

        assert!(rules.is_terminal(&state));
        assert_eq!(rules.legal_action_mask(&state, Player::One).count(), 0);
    }

    #[test]
    fn test_from_config() {
        let config = EngineConfig::default().with_parallel_walls(true);
        assert!(QuoridorRules::from_config(&config).parallel_walls);
    }
}
