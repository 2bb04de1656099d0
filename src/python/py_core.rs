//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Player};

/// Map an interchange sign (`1` / `-1`) to a player.
pub(crate) fn player_from_sign(sign: i8) -> PyResult<Player> {
    Player::from_sign(sign)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 or -1, got {sign}")))
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    /// Decode an action index in `[0, 208]`.
    #[new]
    fn new(index: usize) -> PyResult<Self> {
        Action::from_index(index)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// The action index.
    #[getter]
    fn index(&self) -> usize {
        self.0.index()
    }

    /// Is this a wall placement?
    #[getter]
    fn is_wall(&self) -> bool {
        self.0.is_wall()
    }

    fn __repr__(&self) -> String {
        format!("Action({}: {})", self.0.index(), self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}
