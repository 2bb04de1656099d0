//! Authoritative board state.
//!
//! ## BoardState
//!
//! - Pawn position and remaining walls for each player
//! - The wall grid
//! - The adjacency graph derived from the walls
//! - Whose turn it is
//!
//! The turn marker is carried explicitly: the rules never flip it on their
//! own; the game facade hands the turn over after each committed action.

use crate::core::{
    EngineConfig, Orientation, Player, PlayerMap, Position, WallCell, MAX_WALLS_PER_PLAYER,
};

use super::graph::AdjacencyGraph;
use super::walls::WallGrid;

/// One player's public state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayerState {
    pub position: Position,
    pub walls_remaining: u8,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub(crate) players: PlayerMap<PlayerState>,
    pub(crate) walls: WallGrid,
    pub(crate) graph: AdjacencyGraph,
    pub(crate) current_player: Player,
}

impl BoardState {
    /// Starting position: pawns mid base row, full wall stock, player one
    /// to move. The stock is capped at `MAX_WALLS_PER_PLAYER`.
    #[must_use]
    pub fn initial(config: &EngineConfig) -> Self {
        let stock = config.walls_per_player.min(MAX_WALLS_PER_PLAYER);
        Self {
            players: PlayerMap::new(|p| PlayerState {
                position: p.start_position(),
                walls_remaining: stock,
            }),
            walls: WallGrid::new(),
            graph: AdjacencyGraph::new(),
            current_player: Player::One,
        }
    }

    /// Build a state from parts, deriving the graph from the walls.
    ///
    /// Panics if the walls overlap. Callers decoding outside data validate
    /// first (see `nn::vector::decode`).
    pub(crate) fn from_parts(
        players: PlayerMap<PlayerState>,
        walls: WallGrid,
        current_player: Player,
    ) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (cell, orientation) in walls.placed() {
            for (a, b) in cell.severed_edges(orientation) {
                graph.remove_edge(a, b);
            }
        }
        Self {
            players,
            walls,
            graph,
            current_player,
        }
    }

    #[must_use]
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player]
    }

    /// Pawn position.
    #[must_use]
    pub fn position(&self, player: Player) -> Position {
        self.players[player].position
    }

    /// Walls the player can still place.
    #[must_use]
    pub fn walls_remaining(&self, player: Player) -> u8 {
        self.players[player].walls_remaining
    }

    #[must_use]
    pub fn wall_grid(&self) -> &WallGrid {
        &self.walls
    }

    #[must_use]
    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Same state with a different player to move.
    #[must_use]
    pub fn with_current_player(mut self, player: Player) -> Self {
        self.current_player = player;
        self
    }

    /// Which pawn, if any, stands on `pos`.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<Player> {
        Player::BOTH
            .into_iter()
            .find(|&p| self.players[p].position == pos)
    }

    /// Can `player` still reach its goal row?
    #[must_use]
    pub fn goal_reachable(&self, player: Player) -> bool {
        self.graph
            .reaches_row(self.position(player), player.goal_row(), &[])
    }

    /// Both pawns can reach their goal rows. Holds for every committed state.
    #[must_use]
    pub fn reachability_holds(&self) -> bool {
        Player::BOTH.into_iter().all(|p| self.goal_reachable(p))
    }

    // === Mutation (rules only) ===

    pub(crate) fn move_pawn(&mut self, player: Player, to: Position) {
        self.players[player].position = to;
    }

    /// Write the wall, cut its two edges, and spend one of `player`'s walls.
    pub(crate) fn place_wall(&mut self, player: Player, cell: WallCell, orientation: Orientation) {
        let remaining = &mut self.players[player].walls_remaining;
        assert!(*remaining > 0, "{player} placed a wall with none remaining");
        *remaining -= 1;

        self.walls.place(cell, orientation);
        for (a, b) in cell.severed_edges(orientation) {
            self.graph.remove_edge(a, b);
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial(&EngineConfig::default())
    }
}
