//! Estimator traits for policy and value prediction.
//!
//! The interface between the engine and an external policy/value model
//! (typically in Python via PyO3).

use serde::{Deserialize, Serialize};

use crate::core::{ActionMask, ACTION_SPACE};

/// Encoded game state as a flat tensor for estimator input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, `[70]` for the board vector.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }
}

/// Combined policy-value estimator.
///
/// Given the canonical encoding of a state, returns a probability
/// distribution over the 209 actions and a scalar value for the player to
/// move, in `[-1, 1]`.
pub trait PolicyValueNetwork: Send + Sync {
    /// Predict `(policy, value)` for the given state.
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32);

    /// Batch prediction for multiple states (optional optimization).
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<(Vec<f32>, f32)> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Uniform policy and zero value (baseline for testing).
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPolicyZeroValue;

impl PolicyValueNetwork for UniformPolicyZeroValue {
    fn predict(&self, _encoded: &EncodedState) -> (Vec<f32>, f32) {
        let prob = 1.0 / ACTION_SPACE as f32;
        (vec![prob; ACTION_SPACE], 0.0)
    }
}

/// Zero out illegal actions and renormalise.
///
/// If the estimator put no mass on any legal action the result is uniform
/// over the legal ones. An empty mask yields all zeros.
#[must_use]
pub fn mask_policy(policy: &[f32], mask: &ActionMask) -> Vec<f32> {
    let mut out: Vec<f32> = policy
        .iter()
        .enumerate()
        .map(|(i, &p)| if mask.is_legal(i) { p.max(0.0) } else { 0.0 })
        .collect();
    out.resize(ACTION_SPACE, 0.0);

    let total: f32 = out.iter().sum();
    if total > 0.0 {
        out.iter_mut().for_each(|p| *p /= total);
        return out;
    }

    let legal = mask.count();
    if legal > 0 {
        let prob = 1.0 / legal as f32;
        for i in mask.legal_indices() {
            out[i] = prob;
        }
    }
    out
}
