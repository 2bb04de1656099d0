//! Quoridor game facade.

use crate::board::BoardState;
use crate::core::{Action, ActionMask, EngineConfig, Player, ACTION_SPACE};
use crate::error::{ActionError, ConfigError};
use crate::nn::{canonical, BoardVector, BOARD_VECTOR_LEN};
use crate::rules::{QuoridorRules, RulesEngine};

/// Quoridor with explicit turn handover.
///
/// Wraps `QuoridorRules` with the collaborator-facing contract: masks are
/// computed for the player to move, and `next_state` passes the turn on
/// after every committed action.
#[derive(Clone, Debug, Default)]
pub struct QuoridorGame {
    config: EngineConfig,
    rules: QuoridorRules,
}

impl QuoridorGame {
    /// Build a game without checking the config. Out-of-range wall stocks
    /// are capped when the start position is built.
    pub fn new(config: EngineConfig) -> Self {
        let rules = QuoridorRules::from_config(&config);
        Self { config, rules }
    }

    /// Build a game from a config that must pass `EngineConfig::validate`.
    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rules(&self) -> &QuoridorRules {
        &self.rules
    }

    /// Start position with player one to move.
    #[must_use]
    pub fn initial_state(&self) -> BoardState {
        BoardState::initial(&self.config)
    }

    /// Length of the board vector.
    #[must_use]
    pub const fn board_size(&self) -> usize {
        BOARD_VECTOR_LEN
    }

    /// Number of actions.
    #[must_use]
    pub const fn action_size(&self) -> usize {
        ACTION_SPACE
    }

    /// Mask for the player to move.
    #[must_use]
    pub fn legal_action_mask(&self, state: &BoardState) -> ActionMask {
        self.rules
            .legal_action_mask(state, state.current_player())
    }

    /// Apply `action` for the player to move and hand the turn over.
    pub fn next_state(&self, state: &BoardState, action: Action) -> Result<BoardState, ActionError> {
        let player = state.current_player();
        let next = self.rules.apply_action(state, player, action)?;
        Ok(next.with_current_player(player.other()))
    }

    /// `next_state` for a raw action index.
    pub fn next_state_index(
        &self,
        state: &BoardState,
        index: usize,
    ) -> Result<BoardState, ActionError> {
        self.next_state(state, Action::from_index(index)?)
    }

    #[must_use]
    pub fn winner(&self, state: &BoardState) -> Option<Player> {
        self.rules.winner(state)
    }

    /// Result from `player`'s point of view: `1` won, `-1` lost, `0` ongoing.
    #[must_use]
    pub fn game_ended(&self, state: &BoardState, player: Player) -> i8 {
        match self.winner(state) {
            Some(w) if w == player => 1,
            Some(_) => -1,
            None => 0,
        }
    }

    /// Board vector from the point of view of the player to move.
    #[must_use]
    pub fn canonical_form(&self, state: &BoardState) -> BoardVector {
        canonical(state, state.current_player())
    }

    /// Compact bytes of the canonical form, for transposition tables.
    pub fn state_key(&self, state: &BoardState) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self.canonical_form(state).as_slice())
    }
}

impl RulesEngine for QuoridorGame {
    fn legal_action_mask(&self, state: &BoardState, player: Player) -> ActionMask {
        self.rules.legal_action_mask(state, player)
    }

    fn apply_action(
        &self,
        state: &BoardState,
        player: Player,
        action: Action,
    ) -> Result<BoardState, ActionError> {
        self.rules.apply_action(state, player, action)
    }

    fn winner(&self, state: &BoardState) -> Option<Player> {
        self.rules.winner(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn test_game_creation() {
        let game = QuoridorGame::default();
        let state = game.initial_state();

        assert_eq!(game.board_size(), 70);
        assert_eq!(game.action_size(), 209);
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(game.legal_action_mask(&state).count(), 131);
    }

    #[test]
    fn test_try_new_validates_config() {
        let oversized = EngineConfig::default().with_walls_per_player(20);
        assert!(matches!(
            QuoridorGame::try_new(oversized.clone()),
            Err(ConfigError::Validation(_))
        ));

        // The unchecked constructor caps the stock, so its start position
        // still survives the board vector.
        let game = QuoridorGame::new(oversized);
        let state = game.initial_state();
        assert_eq!(state.walls_remaining(Player::One), 10);
        assert!(crate::nn::decode(&crate::nn::encode(&state)).is_ok());

        assert!(QuoridorGame::try_new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_next_state_hands_over_turn() {
        let game = QuoridorGame::default();
        let state = game.initial_state();
        let next = game
            .next_state(&state, Action::Move(Position::new(4, 1)))
            .unwrap();

        assert_eq!(next.current_player(), Player::Two);
        assert!(game.legal_action_mask(&next).allows(Action::Move(Position::new(4, 7))));
    }

    #[test]
    fn test_next_state_rejects_opponents_move() {
        let game = QuoridorGame::default();
        let state = game.initial_state();
        // (4, 7) is only reachable for player two.
        let err = game
            .next_state(&state, Action::Move(Position::new(4, 7)))
            .unwrap_err();
        assert!(matches!(err, ActionError::IllegalAction { player: Player::One, .. }));
    }

    #[test]
    fn test_game_ended() {
        let game = QuoridorGame::default();
        let mut state = game.initial_state();
        assert_eq!(game.game_ended(&state, Player::One), 0);

        state.move_pawn(Player::Two, Position::new(1, 0));
        assert_eq!(game.game_ended(&state, Player::Two), 1);
        assert_eq!(game.game_ended(&state, Player::One), -1);
    }

    #[test]
    fn test_canonical_form_follows_turn() {
        let game = QuoridorGame::default();
        let state = game.initial_state();
        let next = game
            .next_state(&state, Action::Move(Position::new(3, 0)))
            .unwrap();

        let view = game.canonical_form(&next);
        // Player two sees itself at (4, 0) and the opponent at (3, 8).
        assert_eq!(&view.as_slice()[..6], &[10, 10, 4, 0, 3, 8]);
    }

    #[test]
    fn test_state_key_distinguishes_positions() {
        let game = QuoridorGame::default();
        let state = game.initial_state();
        let moved = game.next_state_index(&state, Position::new(4, 1).index()).unwrap();

        let a = game.state_key(&state).unwrap();
        let b = game.state_key(&moved).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, game.state_key(&state.clone()).unwrap());
    }
}
