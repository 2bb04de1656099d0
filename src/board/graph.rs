//! Cell adjacency graph.
//!
//! An index-addressed 9x9 grid graph: each cell stores a 4-bit mask of the
//! directions it can still move in. Walls only ever remove edges, so the
//! graph starts full and shrinks monotonically.
//!
//! ## Trial removals
//!
//! Wall legality needs "what if these two edges were gone?". Instead of
//! cloning and mutating, `reaches_row` takes the extra edges as an
//! immutable overlay and skips them during the traversal. The committed
//! graph is never touched, so any number of trials can read it at once.

use smallvec::SmallVec;

use crate::core::{Direction, Edge, Position, BOARD_SIZE, CELL_COUNT};

/// Directed adjacency entries in a full 9x9 grid: each of the 2 * 9 * 8
/// undirected edges is counted from both ends.
pub const FULL_EDGE_COUNT: usize = 4 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize - 1);

/// Adjacency of the 81 board cells.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AdjacencyGraph {
    masks: [u8; CELL_COUNT],
}

impl AdjacencyGraph {
    /// The full grid graph: every cell linked to its 2-4 grid neighbours.
    #[must_use]
    pub fn new() -> Self {
        let mut masks = [0u8; CELL_COUNT];
        for pos in Position::all() {
            masks[pos.index()] = Direction::ALL
                .into_iter()
                .filter(|&dir| pos.step(dir).is_some())
                .fold(0, |mask, dir| mask | dir.bit());
        }
        Self { masks }
    }

    /// Is there an edge leaving `pos` in `dir`?
    #[must_use]
    pub fn has_edge_toward(&self, pos: Position, dir: Direction) -> bool {
        self.masks[pos.index()] & dir.bit() != 0
    }

    /// Is there an edge between `a` and `b`? Non-adjacent cells never are.
    #[must_use]
    pub fn has_edge(&self, a: Position, b: Position) -> bool {
        a.direction_to(b)
            .is_some_and(|dir| self.has_edge_toward(a, dir))
    }

    /// Cells reachable in one step from `pos`.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.has_edge_toward(pos, dir))
            .filter_map(|dir| pos.step(dir))
            .collect()
    }

    /// Remove the edge between `a` and `b` in both directions.
    ///
    /// Panics if the edge is absent: callers only remove edges a legal wall
    /// spans, so a missing edge means the wall bookkeeping is corrupt.
    pub fn remove_edge(&mut self, a: Position, b: Position) {
        let dir = a
            .direction_to(b)
            .unwrap_or_else(|| panic!("cells {a} and {b} are not adjacent"));
        assert!(
            self.has_edge_toward(a, dir),
            "edge {a} - {b} already removed"
        );
        self.masks[a.index()] &= !dir.bit();
        self.masks[b.index()] &= !dir.opposite().bit();
    }

    /// Directed adjacency entries left. Removing one edge lowers this by 2,
    /// so every wall lowers it by 4.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.masks.iter().map(|m| m.count_ones() as usize).sum()
    }

    /// Independent copy for callers that want to mutate a trial graph.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Can `from` reach any cell on `row`, ignoring the `severed` edges?
    ///
    /// Breadth-first over fixed-size buffers; visits each cell at most once.
    #[must_use]
    pub fn reaches_row(&self, from: Position, row: u8, severed: &[Edge]) -> bool {
        let cut = |a: Position, b: Position| {
            severed
                .iter()
                .any(|&(p, q)| (p == a && q == b) || (p == b && q == a))
        };

        let mut visited = [false; CELL_COUNT];
        let mut queue = [from; CELL_COUNT];
        let (mut head, mut tail) = (0, 1);
        visited[from.index()] = true;

        while head < tail {
            let current = queue[head];
            head += 1;
            if current.y() == row {
                return true;
            }
            for dir in Direction::ALL {
                if !self.has_edge_toward(current, dir) {
                    continue;
                }
                let Some(next) = current.step(dir) else {
                    continue;
                };
                if visited[next.index()] || cut(current, next) {
                    continue;
                }
                visited[next.index()] = true;
                queue[tail] = next;
                tail += 1;
            }
        }
        false
    }
}

impl Default for AdjacencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AdjacencyGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("edges", &self.edge_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, WallCell};

    fn p(x: u8, y: u8) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn test_full_grid() {
        let graph = AdjacencyGraph::new();
        assert_eq!(graph.edge_count(), FULL_EDGE_COUNT);
        assert_eq!(FULL_EDGE_COUNT, 288);
        assert_eq!(graph.neighbors(p(0, 0)).len(), 2);
        assert_eq!(graph.neighbors(p(4, 0)).len(), 3);
        assert_eq!(graph.neighbors(p(4, 4)).len(), 4);
    }

    #[test]
    fn test_edges_symmetric() {
        let graph = AdjacencyGraph::new();
        for a in Position::all() {
            for b in graph.neighbors(a) {
                assert!(graph.neighbors(b).contains(&a));
            }
        }
    }

    #[test]
    fn test_remove_edge_both_directions() {
        let mut graph = AdjacencyGraph::new();
        graph.remove_edge(p(3, 3), p(3, 4));

        assert!(!graph.has_edge(p(3, 3), p(3, 4)));
        assert!(!graph.has_edge(p(3, 4), p(3, 3)));
        assert!(graph.has_edge(p(3, 3), p(4, 3)));
        assert_eq!(graph.edge_count(), FULL_EDGE_COUNT - 2);
    }

    #[test]
    #[should_panic(expected = "already removed")]
    fn test_remove_missing_edge_panics() {
        let mut graph = AdjacencyGraph::new();
        graph.remove_edge(p(0, 0), p(1, 0));
        graph.remove_edge(p(1, 0), p(0, 0));
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_remove_non_adjacent_panics() {
        let mut graph = AdjacencyGraph::new();
        graph.remove_edge(p(0, 0), p(2, 0));
    }

    #[test]
    fn test_has_edge_non_adjacent() {
        let graph = AdjacencyGraph::new();
        assert!(!graph.has_edge(p(0, 0), p(1, 1)));
        assert!(!graph.has_edge(p(0, 0), p(0, 0)));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let graph = AdjacencyGraph::new();
        let mut trial = graph.snapshot();
        trial.remove_edge(p(0, 0), p(0, 1));
        assert_eq!(graph.edge_count(), FULL_EDGE_COUNT);
        assert_eq!(trial.edge_count(), FULL_EDGE_COUNT - 2);
    }

    #[test]
    fn test_reaches_row_open_board() {
        let graph = AdjacencyGraph::new();
        assert!(graph.reaches_row(p(4, 0), 8, &[]));
        assert!(graph.reaches_row(p(4, 8), 0, &[]));
        assert!(graph.reaches_row(p(4, 8), 8, &[]));
    }

    #[test]
    fn test_reaches_row_respects_severed_overlay() {
        let mut graph = AdjacencyGraph::new();
        // Box in (0, 0) except for its upward edge, then cut that with the overlay.
        graph.remove_edge(p(0, 0), p(1, 0));
        assert!(graph.reaches_row(p(0, 0), 8, &[]));
        assert!(!graph.reaches_row(p(0, 0), 8, &[(p(0, 1), p(0, 0))]));
        // The overlay never touches the graph itself.
        assert!(graph.has_edge(p(0, 0), p(0, 1)));
    }

    #[test]
    fn test_reaches_row_blocked_by_full_row_of_walls() {
        let mut graph = AdjacencyGraph::new();
        // Horizontal walls at x = 0, 2, 4, 6 on row 3 cut columns 0..=7.
        for x in [0, 2, 4, 6] {
            for (a, b) in WallCell::new(x, 3).severed_edges(Orientation::Horizontal) {
                graph.remove_edge(a, b);
            }
        }
        assert!(graph.reaches_row(p(4, 0), 8, &[]));

        // Closing column 8 from below via the overlay seals the board.
        let last = [(p(8, 3), p(8, 4))];
        assert!(!graph.reaches_row(p(4, 0), 8, &last));
        assert!(!graph.reaches_row(p(4, 8), 0, &last));
    }
}
