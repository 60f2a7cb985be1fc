//! Engine selection by name.

use std::fmt;
use std::str::FromStr;

use chess_core::Engine;
use material_engine::{GreedyEngine, MinimaxEngine};
use random_engine::RandomEngine;

use crate::config::{check_depth, ConfigError, MatchConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Greedy,
    /// `None` takes the match's configured depth.
    Minimax { depth: Option<u8> },
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Accepts `random`, `greedy`, `minimax` and `minimax:<depth>`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownStrategy(spec.to_string());
        let (name, arg) = match spec.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (spec, None),
        };

        match (name.to_lowercase().as_str(), arg) {
            ("random" | "rand", None) => Ok(Strategy::Random),
            ("greedy", None) => Ok(Strategy::Greedy),
            ("minimax" | "mm", None) => Ok(Strategy::Minimax { depth: None }),
            ("minimax" | "mm", Some(arg)) => {
                let depth: u8 = arg.parse().map_err(|_| unknown())?;
                check_depth(depth)?;
                Ok(Strategy::Minimax { depth: Some(depth) })
            }
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Minimax { depth: None } => write!(f, "minimax"),
            Strategy::Minimax { depth: Some(d) } => write!(f, "minimax:{}", d),
        }
    }
}

impl Strategy {
    /// Builds the engine. `seed` fixes the random source of the randomized
    /// strategies and is ignored by minimax.
    pub fn build(self, config: &MatchConfig, seed: Option<u64>) -> Box<dyn Engine> {
        match self {
            Strategy::Random => {
                Box::new(seed.map_or_else(RandomEngine::new, RandomEngine::with_seed))
            }
            Strategy::Greedy => {
                Box::new(seed.map_or_else(GreedyEngine::new, GreedyEngine::with_seed))
            }
            Strategy::Minimax { depth } => {
                Box::new(MinimaxEngine::with_depth(depth.unwrap_or(config.depth)))
            }
        }
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod strategy_tests;
