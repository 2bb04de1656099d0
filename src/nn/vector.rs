//! The board vector: the integer interchange format for estimators.
//!
//! | Offset | Len | Content                                   |
//! |--------|-----|-------------------------------------------|
//! | 0      | 2   | walls remaining, player one then two      |
//! | 2      | 2   | player one pawn `x, y`                    |
//! | 4      | 2   | player two pawn `x, y`                    |
//! | 6      | 64  | wall grid, slot `x * 8 + y`, codes 0/1/2  |
//!
//! ## Canonical form
//!
//! For player two the board is seen from the other side: wall counts and
//! pawns swap, rows flip (`y -> 8 - y` for pawns, `y -> 7 - y` for wall
//! slots). Orientations are unchanged by a vertical flip. The transform is
//! its own inverse.

use tracing::debug;

use crate::board::{BoardState, PlayerState, WallGrid};
use crate::core::{
    Action, ActionMask, Orientation, Player, PlayerMap, Position, WallCell, BOARD_SIZE,
    MAX_WALLS_PER_PLAYER, WALL_GRID_SIZE, WALL_SLOT_COUNT,
};
use crate::error::VectorError;

/// Length of a board vector.
pub const BOARD_VECTOR_LEN: usize = GRID_OFFSET + WALL_SLOT_COUNT;

const WALLS_OFFSET: usize = 0;
const GRID_OFFSET: usize = 6;

const fn pawn_offset(player: Player) -> usize {
    2 + 2 * player.index()
}

const fn grid_slot(x: u8, y: u8) -> usize {
    GRID_OFFSET + (x as usize) * (WALL_GRID_SIZE as usize) + y as usize
}

/// Fixed-length board vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardVector([i32; BOARD_VECTOR_LEN]);

impl BoardVector {
    /// Wrap raw values. Only the length is checked here; `decode` checks
    /// that the values describe a real position.
    pub fn new(values: &[i32]) -> Result<Self, VectorError> {
        let array = values.try_into().map_err(|_| VectorError::WrongLength {
            expected: BOARD_VECTOR_LEN,
            actual: values.len(),
        })?;
        Ok(Self(array))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        self.0.to_vec()
    }

    /// The vector as seen by `player`. Identity for player one.
    #[must_use]
    pub fn canonical(&self, player: Player) -> Self {
        match player {
            Player::One => *self,
            Player::Two => self.flipped(),
        }
    }

    /// Swap the players and reflect every row.
    fn flipped(&self) -> Self {
        let v = &self.0;
        let mut out = [0; BOARD_VECTOR_LEN];
        let top = i32::from(BOARD_SIZE) - 1;

        out[WALLS_OFFSET] = v[WALLS_OFFSET + 1];
        out[WALLS_OFFSET + 1] = v[WALLS_OFFSET];
        for player in Player::BOTH {
            let from = pawn_offset(player.other());
            let to = pawn_offset(player);
            out[to] = v[from];
            out[to + 1] = top - v[from + 1];
        }
        for cell in WallCell::all() {
            let flipped = cell.flip_vertical();
            out[grid_slot(flipped.x(), flipped.y())] = v[grid_slot(cell.x(), cell.y())];
        }
        Self(out)
    }

    /// Left-right mirror: `x -> 8 - x` for pawns, `x -> 7 - x` for wall
    /// slots. Players and wall counts stay where they are.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let v = &self.0;
        let mut out = *v;
        let right = i32::from(BOARD_SIZE) - 1;

        for player in Player::BOTH {
            let at = pawn_offset(player);
            out[at] = right - v[at];
        }
        for cell in WallCell::all() {
            let mirrored = cell.mirror();
            out[grid_slot(mirrored.x(), mirrored.y())] = v[grid_slot(cell.x(), cell.y())];
        }
        Self(out)
    }
}

impl std::ops::Index<usize> for BoardVector {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        &self.0[index]
    }
}

impl TryFrom<&[i32]> for BoardVector {
    type Error = VectorError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

/// Serialize a state to its board vector.
#[must_use]
pub fn encode(state: &BoardState) -> BoardVector {
    let mut out = [0; BOARD_VECTOR_LEN];
    for player in Player::BOTH {
        out[WALLS_OFFSET + player.index()] = i32::from(state.walls_remaining(player));
        let pos = state.position(player);
        out[pawn_offset(player)] = i32::from(pos.x());
        out[pawn_offset(player) + 1] = i32::from(pos.y());
    }
    for (slot, code) in out[GRID_OFFSET..].iter_mut().zip(state.wall_grid().codes()) {
        *slot = code;
    }
    BoardVector(out)
}

/// `encode` followed by the canonical flip for `player`.
#[must_use]
pub fn canonical(state: &BoardState, player: Player) -> BoardVector {
    encode(state).canonical(player)
}

/// Rebuild a state from a board vector.
///
/// Validates every field, rebuilds the adjacency graph from the walls, and
/// checks both pawns can still reach their goal rows. Walls on the board
/// plus both stocks may not exceed two full stocks, and at most one pawn
/// may stand on its goal row. The decoded state has player one to move.
pub fn decode(vector: &BoardVector) -> Result<BoardState, VectorError> {
    let v = vector.as_slice();

    let mut walls_remaining = [0u8; 2];
    for player in Player::BOTH {
        let value = v[WALLS_OFFSET + player.index()];
        walls_remaining[player.index()] = u8::try_from(value)
            .ok()
            .filter(|&w| w <= MAX_WALLS_PER_PLAYER)
            .ok_or(VectorError::WallCount {
                player,
                value,
                max: MAX_WALLS_PER_PLAYER,
            })?;
    }

    let mut positions = [Position::new(0, 0); 2];
    for player in Player::BOTH {
        let (x, y) = (v[pawn_offset(player)], v[pawn_offset(player) + 1]);
        positions[player.index()] =
            Position::try_new(x, y).ok_or(VectorError::PawnOffBoard { player, x, y })?;
    }
    if positions[0] == positions[1] {
        return Err(VectorError::SharedCell {
            x: positions[0].x(),
            y: positions[0].y(),
        });
    }
    if Player::BOTH
        .into_iter()
        .all(|p| positions[p.index()].y() == p.goal_row())
    {
        return Err(VectorError::BothOnGoal);
    }

    let mut grid = WallGrid::new();
    for cell in WallCell::all() {
        let index = cell.index();
        let code = v[GRID_OFFSET + index];
        let orientation =
            Orientation::from_code(code).map_err(|code| VectorError::WallCode { index, code })?;
        if let Some(orientation) = orientation {
            if grid.extends_collinear(cell, orientation) {
                return Err(VectorError::OverlappingWall { index });
            }
            grid.place(cell, orientation);
        }
    }

    let players = PlayerMap::new(|p| PlayerState {
        position: positions[p.index()],
        walls_remaining: walls_remaining[p.index()],
    });
    let state = BoardState::from_parts(players, grid, Player::One);
    for player in Player::BOTH {
        if !state.goal_reachable(player) {
            return Err(VectorError::Unreachable { player });
        }
    }

    let placed = state.wall_grid().placed_count();
    let remaining = walls_remaining.iter().map(|&w| usize::from(w)).sum::<usize>();
    let max = 2 * usize::from(MAX_WALLS_PER_PLAYER);
    if placed + remaining > max {
        return Err(VectorError::WallBudget {
            placed,
            remaining,
            max,
        });
    }

    debug!(walls = state.wall_grid().placed_count(), "board vector decoded");
    Ok(state)
}

/// Map an action between the real board and `player`'s canonical view.
///
/// Identity for player one. For player two rows flip, so the mapping is its
/// own inverse.
#[must_use]
pub fn canonical_action(action: Action, player: Player) -> Action {
    match player {
        Player::One => action,
        Player::Two => action.flip_vertical(),
    }
}

/// `canonical_action` over a whole mask.
#[must_use]
pub fn canonical_mask(mask: &ActionMask, player: Player) -> ActionMask {
    match player {
        Player::One => mask.clone(),
        Player::Two => mask.permuted(Action::flip_vertical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::rules::apply;

    fn start() -> BoardState {
        BoardState::initial(&EngineConfig::default())
    }

    fn sample_state() -> BoardState {
        let mut state = start();
        state = apply(&state, Player::One, Action::Move(Position::new(4, 1))).unwrap();
        state = apply(
            &state,
            Player::Two,
            Action::Wall {
                cell: WallCell::new(2, 5),
                orientation: Orientation::Horizontal,
            },
        )
        .unwrap();
        apply(
            &state,
            Player::One,
            Action::Wall {
                cell: WallCell::new(6, 1),
                orientation: Orientation::Vertical,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_initial_vector() {
        let v = encode(&start());
        assert_eq!(BOARD_VECTOR_LEN, 70);
        assert_eq!(&v.as_slice()[..6], &[10, 10, 4, 0, 4, 8]);
        assert!(v.as_slice()[6..].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_wall_codes_in_flat_order() {
        let v = encode(&sample_state());
        assert_eq!(v[grid_slot(2, 5)], 1);
        assert_eq!(v[GRID_OFFSET + 2 * 8 + 5], 1);
        assert_eq!(v[GRID_OFFSET + 6 * 8 + 1], 2);
        assert_eq!(&v.as_slice()[..6], &[9, 9, 4, 1, 4, 8]);
    }

    #[test]
    fn test_canonical_identity_for_player_one() {
        let state = sample_state();
        assert_eq!(canonical(&state, Player::One), encode(&state));
    }

    #[test]
    fn test_canonical_flip() {
        let mut state = sample_state();
        state.players[Player::One].walls_remaining = 3;
        let flipped = canonical(&state, Player::Two);

        assert_eq!(&flipped.as_slice()[..6], &[9, 3, 4, 0, 4, 7]);
        // Horizontal at <2, 5> lands on <2, 2>; vertical at <6, 1> on <6, 6>.
        assert_eq!(flipped[grid_slot(2, 2)], 1);
        assert_eq!(flipped[grid_slot(6, 6)], 2);
        assert_eq!(flipped[grid_slot(2, 5)], 0);
    }

    #[test]
    fn test_canonical_involution() {
        let v = encode(&sample_state());
        assert_eq!(v.canonical(Player::Two).canonical(Player::Two), v);
    }

    #[test]
    fn test_mirror() {
        let v = encode(&sample_state()).mirrored();
        assert_eq!(&v.as_slice()[..6], &[9, 9, 4, 1, 4, 8]);
        assert_eq!(v[grid_slot(5, 5)], 1);
        assert_eq!(v[grid_slot(1, 1)], 2);
        assert_eq!(v.mirrored(), encode(&sample_state()));
    }

    #[test]
    fn test_decode_round_trip() {
        let state = sample_state();
        let decoded = decode(&encode(&state)).unwrap();
        assert_eq!(encode(&decoded), encode(&state));
        assert_eq!(decoded.graph(), state.graph());
        assert_eq!(decoded.current_player(), Player::One);
    }

    #[test]
    fn test_decode_flipped_state() {
        let state = sample_state();
        let flipped = decode(&canonical(&state, Player::Two)).unwrap();
        assert_eq!(flipped.position(Player::One), Position::new(4, 0));
        assert_eq!(flipped.position(Player::Two), Position::new(4, 7));
        assert!(flipped.reachability_holds());
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            BoardVector::new(&[0; 68]),
            Err(VectorError::WrongLength {
                expected: 70,
                actual: 68
            })
        );
    }

    #[test]
    fn test_decode_rejects_bad_fields() {
        let base = encode(&start()).to_vec();

        let mut v = base.clone();
        v[1] = 11;
        assert!(matches!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::WallCount { player: Player::Two, value: 11, .. })
        ));

        let mut v = base.clone();
        v[2] = -1;
        assert!(matches!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::PawnOffBoard { player: Player::One, .. })
        ));

        let mut v = base.clone();
        v[5] = 0;
        assert_eq!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::SharedCell { x: 4, y: 0 })
        );

        let mut v = base.clone();
        v[GRID_OFFSET + 9] = 3;
        assert_eq!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::WallCode { index: 9, code: 3 })
        );

        let mut v = base.clone();
        v[grid_slot(3, 3)] = 1;
        v[grid_slot(4, 3)] = 1;
        assert_eq!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::OverlappingWall { index: 4 * 8 + 3 })
        );
    }

    #[test]
    fn test_decode_rejects_both_pawns_on_goal() {
        let mut v = encode(&start()).to_vec();
        v[2..6].copy_from_slice(&[0, 8, 8, 0]);
        assert_eq!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::BothOnGoal)
        );

        // One pawn home is a finished game and decodes fine.
        v[2..6].copy_from_slice(&[0, 8, 8, 3]);
        let state = decode(&BoardVector::new(&v).unwrap()).unwrap();
        assert_eq!(crate::rules::winner(&state), Some(Player::One));
    }

    #[test]
    fn test_decode_rejects_walls_over_budget() {
        let mut v = encode(&start()).to_vec();
        // Horizontal walls over columns 0..=5 on every row: 24 walls, with
        // columns 6..=8 left open, on top of two full stocks.
        for y in 0..8u8 {
            for x in [0, 2, 4] {
                v[grid_slot(x, y)] = 1;
            }
        }
        assert_eq!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::WallBudget {
                placed: 24,
                remaining: 20,
                max: 20,
            })
        );

        // Stocks that account for the placed walls are fine.
        let mut v = encode(&start()).to_vec();
        v[0] = 9;
        v[1] = 10;
        v[grid_slot(4, 4)] = 2;
        assert!(decode(&BoardVector::new(&v).unwrap()).is_ok());
    }

    #[test]
    fn test_decode_rejects_enclosed_pawn() {
        let mut v = encode(&start()).to_vec();
        // Pawn one boxed into (0, 0) and (0, 1).
        v[0] = 9;
        v[1] = 9;
        v[2] = 0;
        v[3] = 0;
        v[grid_slot(0, 0)] = 2;
        v[grid_slot(0, 1)] = 1;
        assert_eq!(
            decode(&BoardVector::new(&v).unwrap()),
            Err(VectorError::Unreachable { player: Player::One })
        );
    }

    #[test]
    fn test_canonical_action() {
        let step = Action::Move(Position::new(4, 1));
        assert_eq!(canonical_action(step, Player::One), step);
        assert_eq!(
            canonical_action(step, Player::Two),
            Action::Move(Position::new(4, 7))
        );

        let wall = Action::Wall {
            cell: WallCell::new(3, 0),
            orientation: Orientation::Vertical,
        };
        let flipped = canonical_action(wall, Player::Two);
        assert_eq!(
            flipped,
            Action::Wall {
                cell: WallCell::new(3, 7),
                orientation: Orientation::Vertical
            }
        );
        assert_eq!(canonical_action(flipped, Player::Two), wall);
    }

    #[test]
    fn test_canonical_mask() {
        let mut mask = ActionMask::empty();
        mask.allow(Action::Move(Position::new(4, 7)).index());
        let flipped = canonical_mask(&mask, Player::Two);
        assert!(flipped.allows(Action::Move(Position::new(4, 1))));
        assert_eq!(flipped.count(), 1);
        assert_eq!(canonical_mask(&mask, Player::One), mask);
    }
}
