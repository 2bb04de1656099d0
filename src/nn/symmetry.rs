//! Board symmetries for training-data augmentation.
//!
//! Quoridor is symmetric under the left-right mirror. Each symmetric form
//! pairs a board vector with its policy permuted the same way.

use crate::core::{Action, ACTION_SPACE};
use crate::error::VectorError;

use super::vector::BoardVector;

/// Policy over the action space, permuted by the left-right mirror.
pub fn mirror_policy(policy: &[f32]) -> Result<Vec<f32>, VectorError> {
    if policy.len() != ACTION_SPACE {
        return Err(VectorError::WrongLength {
            expected: ACTION_SPACE,
            actual: policy.len(),
        });
    }
    let mut out = vec![0.0; ACTION_SPACE];
    for (action, &p) in Action::all().zip(policy) {
        out[action.mirror().index()] = p;
    }
    Ok(out)
}

/// The identity form followed by the mirrored form.
pub fn symmetries(
    vector: &BoardVector,
    policy: &[f32],
) -> Result<Vec<(BoardVector, Vec<f32>)>, VectorError> {
    let mirrored = mirror_policy(policy)?;
    Ok(vec![
        (*vector, policy.to_vec()),
        (vector.mirrored(), mirrored),
    ])
}
