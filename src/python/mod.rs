//! Python bindings for the Quoridor engine.
//!
//! # Quick Start
//!
//! ```python
//! import quoridor_engine as qe
//!
//! game = qe.QuoridorGame()
//! mask = game.valid_moves()          # numpy uint8, length 209
//! game.next_state(37)                # player 1 steps to (4, 1)
//! board = game.canonical_form()      # numpy int32, length 70
//! forms = game.symmetries([1 / 209] * 209)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;
mod py_nn;

pub use py_core::*;
pub use py_games::*;
pub use py_nn::*;

/// quoridor_engine: Quoridor rules engine for estimator-guided search.
#[pymodule]
fn quoridor_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;

    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyPolicyValueNetwork>()?;

    m.add_class::<PyQuoridorGame>()?;

    Ok(())
}
