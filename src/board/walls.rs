//! The 8x8 grid of placed walls.

use serde::{Deserialize, Serialize};

use crate::core::{Orientation, WallCell, WALL_GRID_SIZE};

const SIZE: usize = WALL_GRID_SIZE as usize;

/// Orientation of the wall in each slot, `None` when empty.
///
/// Addressed `[x][y]`; the flattened order is `x * 8 + y`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallGrid {
    cells: [[Option<Orientation>; SIZE]; SIZE],
}

impl WallGrid {
    /// An empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wall in a slot, if any.
    #[must_use]
    pub fn get(&self, cell: WallCell) -> Option<Orientation> {
        self.cells[cell.x() as usize][cell.y() as usize]
    }

    #[must_use]
    pub fn is_empty_at(&self, cell: WallCell) -> bool {
        self.get(cell).is_none()
    }

    /// Record a wall. Panics if the slot is taken.
    pub fn place(&mut self, cell: WallCell, orientation: Orientation) {
        let slot = &mut self.cells[cell.x() as usize][cell.y() as usize];
        assert!(slot.is_none(), "wall slot {cell} already occupied");
        *slot = Some(orientation);
    }

    /// Would a wall of `orientation` at `cell` touch a collinear wall and
    /// form one over-long wall?
    #[must_use]
    pub fn extends_collinear(&self, cell: WallCell, orientation: Orientation) -> bool {
        cell.collinear_neighbors(orientation)
            .any(|n| self.get(n) == Some(orientation))
    }

    /// Placed walls in index order.
    pub fn placed(&self) -> impl Iterator<Item = (WallCell, Orientation)> + '_ {
        WallCell::all().filter_map(|cell| self.get(cell).map(|o| (cell, o)))
    }

    /// Number of walls on the board.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Board-vector codes (0 empty, 1 horizontal, 2 vertical) in flat order.
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.cells
            .iter()
            .flatten()
            .map(|c| c.map_or(0, Orientation::code))
    }
}
