//! Action representation and the flat action space.
//!
//! Every action has a fixed index in `[0, 208]`:
//!
//! | Range       | Action                     | Index                |
//! |-------------|----------------------------|----------------------|
//! | `0..=80`    | move pawn to `(x, y)`      | `x * 9 + y`          |
//! | `81..=144`  | horizontal wall at `(x, y)`| `81 + x * 8 + y`     |
//! | `145..=208` | vertical wall at `(x, y)`  | `145 + x * 8 + y`    |
//!
//! `ActionMask` is the binary vector over that space handed to search and
//! estimator collaborators.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::position::{Position, CELL_COUNT};
use super::wall::{Orientation, WallCell, WALL_SLOT_COUNT};
use crate::error::ActionError;

/// Number of pawn-move actions.
pub const PAWN_ACTIONS: usize = CELL_COUNT;

/// First horizontal-wall action index.
pub const HORIZONTAL_WALL_OFFSET: usize = PAWN_ACTIONS;

/// First vertical-wall action index.
pub const VERTICAL_WALL_OFFSET: usize = HORIZONTAL_WALL_OFFSET + WALL_SLOT_COUNT;

/// Total size of the action space (209).
pub const ACTION_SPACE: usize = VERTICAL_WALL_OFFSET + WALL_SLOT_COUNT;

/// A complete game action.
///
/// ```
/// use quoridor_engine::core::{Action, Orientation, Position, WallCell};
///
/// let step = Action::Move(Position::new(4, 1));
/// assert_eq!(step.index(), 37);
///
/// let wall = Action::Wall { cell: WallCell::new(0, 0), orientation: Orientation::Vertical };
/// assert_eq!(wall.index(), 145);
/// assert_eq!(Action::from_index(145).unwrap(), wall);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the acting pawn to a cell.
    Move(Position),
    /// Place a wall in a slot.
    Wall {
        cell: WallCell,
        orientation: Orientation,
    },
}

impl Action {
    /// Index of this action in the action space.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Action::Move(pos) => pos.index(),
            Action::Wall {
                cell,
                orientation: Orientation::Horizontal,
            } => HORIZONTAL_WALL_OFFSET + cell.index(),
            Action::Wall {
                cell,
                orientation: Orientation::Vertical,
            } => VERTICAL_WALL_OFFSET + cell.index(),
        }
    }

    /// Decode an action index.
    pub fn from_index(index: usize) -> Result<Self, ActionError> {
        let decoded = if index < HORIZONTAL_WALL_OFFSET {
            Position::from_index(index).map(Action::Move)
        } else if index < VERTICAL_WALL_OFFSET {
            WallCell::from_index(index - HORIZONTAL_WALL_OFFSET).map(|cell| Action::Wall {
                cell,
                orientation: Orientation::Horizontal,
            })
        } else {
            WallCell::from_index(index - VERTICAL_WALL_OFFSET).map(|cell| Action::Wall {
                cell,
                orientation: Orientation::Vertical,
            })
        };
        decoded.ok_or(ActionError::IndexOutOfRange(index))
    }

    /// Is this a wall placement?
    #[must_use]
    pub const fn is_wall(self) -> bool {
        matches!(self, Action::Wall { .. })
    }

    /// The same action seen on a board flipped top-to-bottom.
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        match self {
            Action::Move(pos) => Action::Move(pos.flip_vertical()),
            Action::Wall { cell, orientation } => Action::Wall {
                cell: cell.flip_vertical(),
                orientation,
            },
        }
    }

    /// The same action seen on a board mirrored left-to-right.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Action::Move(pos) => Action::Move(pos.mirror()),
            Action::Wall { cell, orientation } => Action::Wall {
                cell: cell.mirror(),
                orientation,
            },
        }
    }

    /// Iterate over the whole action space in index order.
    pub fn all() -> impl Iterator<Item = Action> {
        (0..ACTION_SPACE).filter_map(|i| Action::from_index(i).ok())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(pos) => write!(f, "move to {pos}"),
            Action::Wall { cell, orientation } => write!(f, "{orientation} wall at {cell}"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for playout trajectories and replay/debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Half-move number, starting at 0.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, action: Action, ply: u32) -> Self {
        Self {
            player,
            action,
            ply,
        }
    }
}

/// Binary vector over the action space, 1 where the action is legal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask {
    bits: Vec<u8>,
}

impl ActionMask {
    /// A mask with every action illegal.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bits: vec![0; ACTION_SPACE],
        }
    }

    /// Build a mask from a slice of 0/1 flags.
    ///
    /// Returns `None` when the slice has the wrong length.
    #[must_use]
    pub fn from_bits(bits: &[u8]) -> Option<Self> {
        (bits.len() == ACTION_SPACE).then(|| Self {
            bits: bits.iter().map(|&b| u8::from(b != 0)).collect(),
        })
    }

    /// Mark an action index legal.
    pub fn allow(&mut self, index: usize) {
        self.bits[index] = 1;
    }

    /// Is this index legal? Out-of-range indices are not.
    #[must_use]
    pub fn is_legal(&self, index: usize) -> bool {
        self.bits.get(index).is_some_and(|&b| b == 1)
    }

    /// Is this action legal?
    #[must_use]
    pub fn allows(&self, action: Action) -> bool {
        self.is_legal(action.index())
    }

    /// Indices of legal actions, ascending.
    pub fn legal_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == 1)
            .map(|(i, _)| i)
    }

    /// Number of legal actions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Number of legal wall placements.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.bits[HORIZONTAL_WALL_OFFSET..]
            .iter()
            .filter(|&&b| b == 1)
            .count()
    }

    /// The raw 0/1 vector, length 209.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Consume into the raw 0/1 vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bits
    }

    /// Remap every legal index through an action-space permutation.
    #[must_use]
    pub fn permuted(&self, map: impl Fn(Action) -> Action) -> Self {
        let mut out = Self::empty();
        for action in self.legal_indices().filter_map(|i| Action::from_index(i).ok()) {
            out.allow(map(action).index());
        }
        out
    }
}

impl Default for ActionMask {
    fn default() -> Self {
        Self::empty()
    }
}
