//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::BoardState;
use crate::core::{Action, EngineConfig};
use crate::games::quoridor::QuoridorGame;
use crate::nn::{canonical_action, decode, encode, symmetries, BoardVector};

use super::py_core::{player_from_sign, PyAction};

fn value_error(e: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Python wrapper for QuoridorGame.
///
/// Holds the current position; `next_state` advances it and hands the turn
/// over.
#[pyclass(name = "QuoridorGame")]
pub struct PyQuoridorGame {
    game: QuoridorGame,
    state: BoardState,
}

#[pymethods]
impl PyQuoridorGame {
    /// Create a new game at the start position.
    ///
    /// # Arguments
    /// - walls_per_player: wall stock for each player (1-10)
    /// - parallel_walls: check wall candidates on the rayon pool
    #[new]
    #[pyo3(signature = (walls_per_player = 10, parallel_walls = false))]
    fn new(walls_per_player: u8, parallel_walls: bool) -> PyResult<Self> {
        let config = EngineConfig::default()
            .with_walls_per_player(walls_per_player)
            .with_parallel_walls(parallel_walls);
        let game = QuoridorGame::try_new(config).map_err(value_error)?;
        let state = game.initial_state();
        Ok(Self { game, state })
    }

    /// Replace the position with a decoded board vector (player 1 to move).
    fn load_vector(&mut self, vector: Vec<i32>) -> PyResult<()> {
        let vector = BoardVector::new(&vector).map_err(value_error)?;
        self.state = decode(&vector).map_err(value_error)?;
        Ok(())
    }

    #[getter]
    fn board_size(&self) -> usize {
        self.game.board_size()
    }

    #[getter]
    fn action_size(&self) -> usize {
        self.game.action_size()
    }

    /// Player to move as `1` or `-1`.
    #[getter]
    fn current_player(&self) -> i8 {
        self.state.current_player().sign()
    }

    /// Legal-action mask for the player to move, as a numpy array.
    fn valid_moves<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        let mask = self.game.legal_action_mask(&self.state);
        PyArray1::from_slice_bound(py, mask.as_slice())
    }

    /// Legal actions for the player to move.
    fn legal_actions(&self) -> Vec<PyAction> {
        self.game
            .legal_action_mask(&self.state)
            .legal_indices()
            .filter_map(|i| Action::from_index(i).ok())
            .map(PyAction)
            .collect()
    }

    /// Apply an action index for the player to move.
    fn next_state(&mut self, action: usize) -> PyResult<()> {
        self.state = self
            .game
            .next_state_index(&self.state, action)
            .map_err(value_error)?;
        Ok(())
    }

    /// `1` / `-1` from `player`'s view once decided, else `0`.
    fn game_ended(&self, player: i8) -> PyResult<i8> {
        Ok(self.game.game_ended(&self.state, player_from_sign(player)?))
    }

    /// Winner as `1`, `-1`, or `0`.
    fn winner(&self) -> i8 {
        self.game.winner(&self.state).map_or(0, |p| p.sign())
    }

    /// Raw board vector.
    fn board<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i32>> {
        PyArray1::from_slice_bound(py, encode(&self.state).as_slice())
    }

    /// Board vector seen by the player to move.
    fn canonical_form<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i32>> {
        PyArray1::from_slice_bound(py, self.game.canonical_form(&self.state).as_slice())
    }

    /// Map an action index between the real board and `player`'s view.
    #[staticmethod]
    fn canonical_action(action: usize, player: i8) -> PyResult<usize> {
        let action = Action::from_index(action).map_err(value_error)?;
        Ok(canonical_action(action, player_from_sign(player)?).index())
    }

    /// Identity and mirrored `(board, pi)` pairs for the canonical form.
    fn symmetries(&self, pi: Vec<f32>) -> PyResult<Vec<(Vec<i32>, Vec<f32>)>> {
        let forms = symmetries(&self.game.canonical_form(&self.state), &pi).map_err(value_error)?;
        Ok(forms.into_iter().map(|(v, p)| (v.to_vec(), p)).collect())
    }

    /// Compact key of the canonical form.
    fn string_representation(&self) -> PyResult<Vec<u8>> {
        self.game.state_key(&self.state).map_err(value_error)
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
            state: self.state.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let status = match self.game.winner(&self.state) {
            Some(p) => format!("won by {p}"),
            None => "ongoing".to_string(),
        };
        format!(
            "QuoridorGame(to_move={}, status={})",
            self.state.current_player(),
            status
        )
    }
}
