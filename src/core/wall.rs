//! Wall slots.
//!
//! Walls sit on the 8x8 grid of intersections between cells. The slot at
//! `(x, y)` is the shared corner of cells `(x, y)`, `(x+1, y)`, `(x, y+1)`
//! and `(x+1, y+1)`; a wall there is two cells long and cuts two edges.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Slots per side of the wall grid.
pub const WALL_GRID_SIZE: u8 = 8;

/// Number of wall slots.
pub const WALL_SLOT_COUNT: usize = (WALL_GRID_SIZE as usize) * (WALL_GRID_SIZE as usize);

/// An undirected edge between two adjacent cells.
pub type Edge = (Position, Position);

/// Wall orientation. An empty slot is `Option::None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Blocks movement between rows `y` and `y+1`.
    Horizontal,
    /// Blocks movement between columns `x` and `x+1`.
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first (the action-space order).
    pub const ALL: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

    /// Board-vector code: 1 horizontal, 2 vertical.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Orientation::Horizontal => 1,
            Orientation::Vertical => 2,
        }
    }

    /// Decode a board-vector slot. `Ok(None)` is an empty slot.
    pub fn from_code(code: i32) -> Result<Option<Self>, i32> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(Orientation::Horizontal)),
            2 => Ok(Some(Orientation::Vertical)),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A wall slot, always within `[0, 7] x [0, 7]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct WallCell {
    x: u8,
    y: u8,
}

impl WallCell {
    /// Create a wall slot. Panics off the grid.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < WALL_GRID_SIZE && y < WALL_GRID_SIZE, "wall slot off the grid");
        Self { x, y }
    }

    /// Create a wall slot from signed coordinates, `None` off the grid.
    #[must_use]
    pub fn try_new(x: i32, y: i32) -> Option<Self> {
        let range = 0..i32::from(WALL_GRID_SIZE);
        if range.contains(&x) && range.contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Flat index `x * 8 + y`, shared by the wall grid and the action space.
    #[must_use]
    pub const fn index(self) -> usize {
        self.x as usize * WALL_GRID_SIZE as usize + self.y as usize
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= WALL_SLOT_COUNT {
            return None;
        }
        let size = WALL_GRID_SIZE as usize;
        Some(Self {
            x: (index / size) as u8,
            y: (index % size) as u8,
        })
    }

    /// The two edges a wall of `orientation` cuts when placed here.
    ///
    /// Horizontal cuts the vertical edges between rows `y` and `y+1` in
    /// columns `x` and `x+1`. Vertical cuts the horizontal edges between
    /// columns `x` and `x+1` in rows `y` and `y+1`.
    #[must_use]
    pub const fn severed_edges(self, orientation: Orientation) -> [Edge; 2] {
        let (x, y) = (self.x, self.y);
        match orientation {
            Orientation::Horizontal => [
                (Position::new(x, y), Position::new(x, y + 1)),
                (Position::new(x + 1, y), Position::new(x + 1, y + 1)),
            ],
            Orientation::Vertical => [
                (Position::new(x, y), Position::new(x + 1, y)),
                (Position::new(x, y + 1), Position::new(x + 1, y + 1)),
            ],
        }
    }

    /// Slots that would merge with a wall of `orientation` here into one
    /// over-long wall: left/right for horizontal, below/above for vertical.
    pub fn collinear_neighbors(self, orientation: Orientation) -> impl Iterator<Item = WallCell> {
        let (x, y) = (i32::from(self.x), i32::from(self.y));
        let candidates = match orientation {
            Orientation::Horizontal => [(x - 1, y), (x + 1, y)],
            Orientation::Vertical => [(x, y - 1), (x, y + 1)],
        };
        candidates
            .into_iter()
            .filter_map(|(cx, cy)| WallCell::try_new(cx, cy))
    }

    /// Reflect across the horizontal midline (`y -> 7 - y`).
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Self {
            x: self.x,
            y: WALL_GRID_SIZE - 1 - self.y,
        }
    }

    /// Reflect across the vertical midline (`x -> 7 - x`).
    #[must_use]
    pub const fn mirror(self) -> Self {
        Self {
            x: WALL_GRID_SIZE - 1 - self.x,
            y: self.y,
        }
    }

    /// Iterate over every slot, in index order.
    pub fn all() -> impl Iterator<Item = WallCell> {
        (0..WALL_SLOT_COUNT).filter_map(Self::from_index)
    }
}

impl TryFrom<(u8, u8)> for WallCell {
    type Error = String;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(x), i32::from(y))
            .ok_or_else(|| format!("wall slot ({x}, {y}) is off the grid"))
    }
}

impl From<WallCell> for (u8, u8) {
    fn from(c: WallCell) -> Self {
        (c.x, c.y)
    }
}

impl std::fmt::Display for WallCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}
