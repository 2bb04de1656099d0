//! Wall placement legality.
//!
//! Cheap preconditions first (stock, empty slot, no collinear extension),
//! then one reachability traversal per pawn with the wall's two edges cut
//! through an overlay. The committed graph is only read, so the candidates
//! of a full mask can be checked in parallel.

use rayon::prelude::*;
use tracing::trace;

use crate::board::BoardState;
use crate::core::{Action, ActionMask, Orientation, Player, WallCell, WALL_SLOT_COUNT};

/// Number of wall candidates checked by a full mask.
pub const WALL_CANDIDATES: usize = 2 * WALL_SLOT_COUNT;

/// Why a wall was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallRejection {
    NoWallsRemaining,
    Occupied,
    ExtendsCollinear,
    BlocksPath(Player),
}

/// Checks that need no traversal.
pub fn wall_preconditions(
    state: &BoardState,
    player: Player,
    cell: WallCell,
    orientation: Orientation,
) -> Result<(), WallRejection> {
    if state.walls_remaining(player) == 0 {
        return Err(WallRejection::NoWallsRemaining);
    }
    let grid = state.wall_grid();
    if !grid.is_empty_at(cell) {
        return Err(WallRejection::Occupied);
    }
    if grid.extends_collinear(cell, orientation) {
        return Err(WallRejection::ExtendsCollinear);
    }
    Ok(())
}

/// Full legality check, reporting the first failed rule.
pub fn check_wall(
    state: &BoardState,
    player: Player,
    cell: WallCell,
    orientation: Orientation,
) -> Result<(), WallRejection> {
    wall_preconditions(state, player, cell, orientation)?;

    let severed = cell.severed_edges(orientation);
    let graph = state.graph();
    for pawn in Player::BOTH {
        if !graph.reaches_row(state.position(pawn), pawn.goal_row(), &severed) {
            return Err(WallRejection::BlocksPath(pawn));
        }
    }
    Ok(())
}

/// Can `player` place a wall of `orientation` at `cell`?
#[must_use]
pub fn is_legal_wall(
    state: &BoardState,
    player: Player,
    cell: WallCell,
    orientation: Orientation,
) -> bool {
    match check_wall(state, player, cell, orientation) {
        Ok(()) => true,
        Err(reason) => {
            trace!(%player, %cell, %orientation, ?reason, "wall rejected");
            false
        }
    }
}

/// Every wall action, in action-index order.
fn wall_candidates() -> impl Iterator<Item = (WallCell, Orientation)> {
    Orientation::ALL
        .into_iter()
        .flat_map(|o| WallCell::all().map(move |cell| (cell, o)))
}

/// Set the legal wall entries of `mask`.
///
/// With `parallel` the 128 candidates are checked on the rayon pool; the
/// result is the same either way.
pub fn fill_wall_mask(state: &BoardState, player: Player, parallel: bool, mask: &mut ActionMask) {
    if state.walls_remaining(player) == 0 {
        return;
    }

    let legal = |&(cell, orientation): &(WallCell, Orientation)| {
        is_legal_wall(state, player, cell, orientation)
    };
    let to_index =
        |(cell, orientation): (WallCell, Orientation)| Action::Wall { cell, orientation }.index();

    if parallel {
        let candidates: Vec<_> = wall_candidates().collect();
        let indices: Vec<usize> = candidates
            .into_par_iter()
            .filter(|c| legal(c))
            .map(to_index)
            .collect();
        for index in indices {
            mask.allow(index);
        }
    } else {
        for index in wall_candidates().filter(legal).map(to_index) {
            mask.allow(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PlayerState, WallGrid};
    use crate::core::{EngineConfig, PlayerMap, Position, HORIZONTAL_WALL_OFFSET};

    fn state_with(walls: &[(WallCell, Orientation)], one: Position, two: Position) -> BoardState {
        let mut grid = WallGrid::new();
        for &(cell, o) in walls {
            grid.place(cell, o);
        }
        let players = PlayerMap::new(|pl| PlayerState {
            position: if pl == Player::One { one } else { two },
            walls_remaining: 10,
        });
        BoardState::from_parts(players, grid, Player::One)
    }

    #[test]
    fn test_open_board_all_walls_legal() {
        let state = BoardState::initial(&EngineConfig::default());
        let mut mask = ActionMask::empty();
        fill_wall_mask(&state, Player::One, false, &mut mask);
        assert_eq!(mask.wall_count(), WALL_CANDIDATES);
        assert!(!mask.is_legal(HORIZONTAL_WALL_OFFSET - 1));
    }

    #[test]
    fn test_occupied_slot_rejected_for_both_orientations() {
        let state = state_with(
            &[(WallCell::new(3, 3), Orientation::Horizontal)],
            Position::new(4, 0),
            Position::new(4, 8),
        );
        for o in Orientation::ALL {
            assert_eq!(
                check_wall(&state, Player::One, WallCell::new(3, 3), o),
                Err(WallRejection::Occupied)
            );
        }
    }

    #[test]
    fn test_collinear_rejected_crossing_allowed() {
        let state = state_with(
            &[(WallCell::new(3, 3), Orientation::Horizontal)],
            Position::new(4, 0),
            Position::new(4, 8),
        );
        let cell = WallCell::new(4, 3);
        assert_eq!(
            check_wall(&state, Player::One, cell, Orientation::Horizontal),
            Err(WallRejection::ExtendsCollinear)
        );
        // A vertical wall next to a horizontal one is fine.
        assert!(is_legal_wall(&state, Player::One, cell, Orientation::Vertical));
        // Two slots apart does not merge.
        assert!(is_legal_wall(
            &state,
            Player::One,
            WallCell::new(5, 3),
            Orientation::Horizontal
        ));
    }

    #[test]
    fn test_no_walls_remaining() {
        let mut state = BoardState::initial(&EngineConfig::default().with_walls_per_player(1));
        state.place_wall(Player::One, WallCell::new(0, 4), Orientation::Vertical);
        assert_eq!(
            check_wall(&state, Player::One, WallCell::new(6, 6), Orientation::Vertical),
            Err(WallRejection::NoWallsRemaining)
        );

        let mut mask = ActionMask::empty();
        fill_wall_mask(&state, Player::One, false, &mut mask);
        assert_eq!(mask.wall_count(), 0);
    }

    #[test]
    fn test_enclosing_wall_rejected() {
        // Pawn one at (0, 0) with a vertical wall cutting columns 0 and 1
        // for rows 0 and 1. A horizontal wall above row 1 closes the pocket.
        let state = state_with(
            &[(WallCell::new(0, 0), Orientation::Vertical)],
            Position::new(0, 0),
            Position::new(4, 8),
        );
        let closing = WallCell::new(0, 1);
        assert_eq!(
            check_wall(&state, Player::Two, closing, Orientation::Horizontal),
            Err(WallRejection::BlocksPath(Player::One))
        );
        assert!(!is_legal_wall(&state, Player::Two, closing, Orientation::Horizontal));
    }

    #[test]
    fn test_enclosing_opponent_rejected() {
        // Pawn two in the top-right corner behind a vertical wall at <7, 7>.
        // Player one closing the pocket from below fails only on pawn two.
        let state = state_with(
            &[(WallCell::new(7, 7), Orientation::Vertical)],
            Position::new(4, 0),
            Position::new(8, 8),
        );
        let closing = WallCell::new(7, 6);
        assert_eq!(
            check_wall(&state, Player::One, closing, Orientation::Horizontal),
            Err(WallRejection::BlocksPath(Player::Two))
        );

        let mut mask = ActionMask::empty();
        fill_wall_mask(&state, Player::One, false, &mut mask);
        let action = Action::Wall {
            cell: closing,
            orientation: Orientation::Horizontal,
        };
        assert!(!mask.allows(action));
        // One slot to the left the pocket stays open below (8, 7).
        assert!(is_legal_wall(
            &state,
            Player::One,
            WallCell::new(6, 6),
            Orientation::Horizontal
        ));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let state = state_with(
            &[
                (WallCell::new(0, 0), Orientation::Vertical),
                (WallCell::new(2, 4), Orientation::Horizontal),
                (WallCell::new(5, 5), Orientation::Vertical),
            ],
            Position::new(0, 0),
            Position::new(4, 8),
        );
        let mut sequential = ActionMask::empty();
        let mut parallel = ActionMask::empty();
        fill_wall_mask(&state, Player::Two, false, &mut sequential);
        fill_wall_mask(&state, Player::Two, true, &mut parallel);
        assert_eq!(sequential, parallel);
        assert!(sequential.wall_count() < WALL_CANDIDATES);
    }
}
