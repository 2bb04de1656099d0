//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! walls_per_player = 10
//! parallel_walls = true
//! max_plies = 200
//! seed = 7
//! ```
//!
//! Missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Most walls a player may ever hold.
pub const MAX_WALLS_PER_PLAYER: u8 = 10;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Walls each player starts with (default: 10).
    pub walls_per_player: u8,

    /// Build the wall half of the legal-action mask on the rayon pool.
    /// The mask is identical either way.
    pub parallel_walls: bool,

    /// Ply limit for random playouts. The rules themselves never stop a game.
    pub max_plies: u32,

    /// Seed for playout RNG.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            walls_per_player: MAX_WALLS_PER_PLAYER,
            parallel_walls: false,
            max_plies: 200,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Set the starting wall count.
    pub fn with_walls_per_player(mut self, walls: u8) -> Self {
        self.walls_per_player = walls;
        self
    }

    /// Enable or disable the parallel wall mask.
    pub fn with_parallel_walls(mut self, parallel: bool) -> Self {
        self.parallel_walls = parallel;
        self
    }

    /// Set the playout ply limit.
    pub fn with_max_plies(mut self, plies: u32) -> Self {
        self.max_plies = plies;
        self
    }

    /// Set the playout seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.walls_per_player == 0 || self.walls_per_player > MAX_WALLS_PER_PLAYER {
            return Err(ConfigError::Validation(format!(
                "walls_per_player must be in 1..={MAX_WALLS_PER_PLAYER}"
            )));
        }
        if self.max_plies == 0 {
            return Err(ConfigError::Validation("max_plies must be > 0".into()));
        }
        Ok(())
    }
}
