//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Quoridor is strictly two-player. `Player::One` starts on row 0 and wins on
//! row 8; `Player::Two` starts on row 8 and wins on row 0. The interchange
//! format identifies them by sign: `1` and `-1`.
//!
//! ## PlayerMap
//!
//! Fixed per-player storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::position::{Position, BOARD_SIZE};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first, starts at `(4, 0)`.
    One,
    /// Starts at `(4, 8)`.
    Two,
}

impl Player {
    /// Both players, in index order.
    pub const BOTH: [Player; 2] = [Player::One, Player::Two];

    /// Interchange sign: `1` for player one, `-1` for player two.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Inverse of `sign`.
    ///
    /// ```
    /// use quoridor_engine::core::Player;
    ///
    /// assert_eq!(Player::from_sign(-1), Some(Player::Two));
    /// assert_eq!(Player::from_sign(0), None);
    /// ```
    #[must_use]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1 => Some(Player::One),
            -1 => Some(Player::Two),
            _ => None,
        }
    }

    /// 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The opponent.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row this player must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        match self {
            Player::One => BOARD_SIZE - 1,
            Player::Two => 0,
        }
    }

    /// Starting cell: the middle of the player's base row.
    #[must_use]
    pub const fn start_position(self) -> Position {
        Position::new(BOARD_SIZE / 2, self.other().goal_row())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use quoridor_engine::core::{Player, PlayerMap};
///
/// let mut walls: PlayerMap<u8> = PlayerMap::new(|_| 10);
/// walls[Player::Two] -= 1;
///
/// assert_eq!(walls[Player::One], 10);
/// assert_eq!(walls[Player::Two], 9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
