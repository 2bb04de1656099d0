//! Estimator type bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::ACTION_SPACE;
use crate::nn::{EncodedState, PolicyValueNetwork};

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    /// Create a new encoded state from tensor data and shape.
    #[new]
    fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        Self(EncodedState::new(tensor, shape))
    }

    /// Get the tensor data as a list.
    #[getter]
    fn tensor(&self) -> Vec<f32> {
        self.0.tensor.clone()
    }

    /// Get the tensor shape.
    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Python-implemented estimator wrapper.
///
/// Lets a Python callable serve as a `PolicyValueNetwork` from Rust.
#[pyclass(name = "PolicyValueNetwork")]
pub struct PyPolicyValueNetwork {
    callback: PyObject,
}

#[pymethods]
impl PyPolicyValueNetwork {
    /// Wrap a callable taking an EncodedState and returning
    /// `(policy: List[float] of length 209, value: float)`.
    #[new]
    fn new(callback: PyObject) -> Self {
        Self { callback }
    }

    /// Call the estimator on an encoded state.
    fn predict(&self, py: Python<'_>, encoded: &PyEncodedState) -> PyResult<(Vec<f32>, f32)> {
        let result = self.callback.call1(py, (encoded.clone(),))?;
        result.extract(py)
    }
}

impl PyPolicyValueNetwork {
    fn fallback_prediction() -> (Vec<f32>, f32) {
        (vec![1.0 / ACTION_SPACE as f32; ACTION_SPACE], 0.0)
    }
}

impl PolicyValueNetwork for PyPolicyValueNetwork {
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32) {
        Python::with_gil(|py| {
            let py_encoded = PyEncodedState(encoded.clone());
            match self
                .callback
                .call1(py, (py_encoded,))
                .and_then(|result| result.extract::<(Vec<f32>, f32)>(py))
            {
                Ok(prediction) => prediction,
                Err(e) => {
                    tracing::warn!(error = %e, "python estimator failed, using uniform policy");
                    Self::fallback_prediction()
                }
            }
        })
    }
}

// SAFETY: every access to `callback` goes through `Python::with_gil`, and
// `PyObject` reference counting is safe across threads under the GIL.
unsafe impl Send for PyPolicyValueNetwork {}
unsafe impl Sync for PyPolicyValueNetwork {}
