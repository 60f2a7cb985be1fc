//! Match configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use material_engine::{DEFAULT_DEPTH, MAX_DEPTH};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown strategy `{0}` (expected random, greedy or minimax[:depth])")]
    UnknownStrategy(String),

    #[error("search depth {0} is outside 1..={max}", max = MAX_DEPTH)]
    InvalidDepth(u8),

    #[error("a match needs at least one game")]
    NoGames,

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value `{value}` for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("match requires two engine specifications")]
    MissingEngines,
}

/// Configuration for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Minimax depth for engines given without an explicit one
    pub depth: u8,
    /// Half-moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Base seed for the randomized engines and the fallback picker
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            depth: DEFAULT_DEPTH,
            max_moves: 200,
            alternate_colors: true,
            seed: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Reads and validates a TOML config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        check_depth(self.depth)
    }

    /// Seed for the engine in `slot`, derived from the base seed.
    pub fn engine_seed(&self, slot: u64) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(slot))
    }
}

pub(crate) fn check_depth(depth: u8) -> Result<(), ConfigError> {
    if (1..=MAX_DEPTH).contains(&depth) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDepth(depth))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
