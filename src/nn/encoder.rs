//! State encoding for estimator input.
//!
//! Turns a board state into the `f32` tensor an estimator consumes.

use crate::board::BoardState;
use crate::core::{Player, ACTION_SPACE};
use crate::nn::traits::EncodedState;
use crate::nn::vector::{canonical, BOARD_VECTOR_LEN};

/// Encodes game state into tensors for estimator input.
///
/// Each encoder defines:
/// - How to convert state to a tensor from a player's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    fn encode(&self, state: &BoardState, perspective: Player) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Length of the policy vector.
    fn action_space_size(&self) -> usize;
}

/// The canonical board vector as a flat `f32` tensor of shape `[70]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalEncoder;

impl StateEncoder for CanonicalEncoder {
    fn encode(&self, state: &BoardState, perspective: Player) -> EncodedState {
        let tensor = canonical(state, perspective)
            .as_slice()
            .iter()
            .map(|&v| v as f32)
            .collect();
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![BOARD_VECTOR_LEN]
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE
    }
}
