//! Board coordinates.
//!
//! ## Position
//!
//! A cell on the 9x9 board, `x` is the column and `y` the row. Player one
//! starts on row 0 and races to row 8; player two does the opposite.
//!
//! ## Direction
//!
//! The four grid directions a pawn can step in. Each direction owns one bit
//! of the adjacency mask kept by `AdjacencyGraph`.

use serde::{Deserialize, Serialize};

/// Cells per side of the board.
pub const BOARD_SIZE: u8 = 9;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A cell on the board, always within `[0, 8] x [0, 8]`.
///
/// ```
/// use quoridor_engine::core::Position;
///
/// let p = Position::new(4, 0);
/// assert_eq!(p.index(), 36);
/// assert_eq!(Position::try_new(9, 0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Create a position.
    ///
    /// Panics if the coordinates are off the board. Use `try_new` for
    /// coordinates that come from outside the engine.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < BOARD_SIZE && y < BOARD_SIZE, "position off the board");
        Self { x, y }
    }

    /// Create a position from signed coordinates, `None` if off the board.
    #[must_use]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        let range = 0..i32::from(BOARD_SIZE);
        if range.contains(&x) && range.contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Flat index `x * 9 + y`, which is also the pawn action index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.x as usize * BOARD_SIZE as usize + self.y as usize
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self {
            x: (index / size) as u8,
            y: (index % size) as u8,
        })
    }

    /// The neighbouring cell in `dir`, `None` at the board edge.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.offset();
        Self::try_new(i32::from(self.x) + dx, i32::from(self.y) + dy)
    }

    /// Reflect across the horizontal midline (`y -> 8 - y`).
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Self {
            x: self.x,
            y: BOARD_SIZE - 1 - self.y,
        }
    }

    /// Reflect across the vertical midline (`x -> 8 - x`).
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self {
            x: BOARD_SIZE - 1 - self.x,
            y: self.y,
        }
    }

    /// Direction from `self` to an orthogonally adjacent `other`.
    #[must_use]
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(dir) == Some(other))
    }

    /// Iterate over every cell, in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).filter_map(Self::from_index)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = String;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(x), i32::from(y))
            .ok_or_else(|| format!("position ({x}, {y}) is off the board"))
    }
}

impl From<Position> for (u8, u8) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A grid direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards column 0.
    Left,
    /// Towards column 8.
    Right,
    /// Towards row 0.
    Down,
    /// Towards row 8.
    Up,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// `(dx, dy)` step for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }

    /// Bit for this direction in an adjacency mask.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Direction::Left => 0b0001,
            Direction::Right => 0b0010,
            Direction::Down => 0b0100,
            Direction::Up => 0b1000,
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }

    /// The two directions at right angles to this one.
    #[must_use]
    pub const fn orthogonal(self) -> [Direction; 2] {
        match self {
            Direction::Left | Direction::Right => [Direction::Down, Direction::Up],
            Direction::Down | Direction::Up => [Direction::Left, Direction::Right],
        }
    }
}
