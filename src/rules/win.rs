//! Win detection.

use crate::board::BoardState;
use crate::core::Player;

/// The player whose pawn stands on its goal row, if any.
///
/// Player one is checked first; under the reachability invariant both can
/// never hold at once because a won game is never moved again.
#[must_use]
pub fn winner(state: &BoardState) -> Option<Player> {
    Player::BOTH
        .into_iter()
        .find(|&p| state.position(p).y() == p.goal_row())
}

/// Interchange form of `winner`: `1`, `-1`, or `0` while the game runs.
#[must_use]
pub fn winner_sign(state: &BoardState) -> i8 {
    winner(state).map_or(0, Player::sign)
}
