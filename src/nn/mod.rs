//! Estimator integration.
//!
//! The board vector interchange format plus the traits an external
//! policy/value estimator plugs into.
//!
//! ## Overview
//!
//! - **Vector**: `encode`, `decode`, `canonical`, `canonical_action`
//! - **Symmetry**: left-right mirror for training-data augmentation
//! - **Encoding**: `StateEncoder` trait and `CanonicalEncoder`
//! - **Baseline**: `UniformPolicyZeroValue` for testing
//!
//! ## Usage
//!
//! ```
//! use quoridor_engine::board::BoardState;
//! use quoridor_engine::core::{EngineConfig, Player};
//! use quoridor_engine::nn::{CanonicalEncoder, PolicyValueNetwork, StateEncoder, UniformPolicyZeroValue};
//!
//! let state = BoardState::initial(&EngineConfig::default());
//! let encoded = CanonicalEncoder.encode(&state, Player::One);
//! let (policy, value) = UniformPolicyZeroValue.predict(&encoded);
//! assert_eq!(policy.len(), 209);
//! assert_eq!(value, 0.0);
//! ```

pub mod encoder;
pub mod symmetry;
pub mod traits;
pub mod vector;

pub use encoder::{CanonicalEncoder, StateEncoder};
pub use symmetry::{mirror_policy, symmetries};
pub use traits::{mask_policy, EncodedState, PolicyValueNetwork, UniformPolicyZeroValue};
pub use vector::{
    canonical, canonical_action, canonical_mask, decode, encode, BoardVector, BOARD_VECTOR_LEN,
};
