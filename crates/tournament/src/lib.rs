//! Match runner for the material-chess selectors
//!
//! This crate provides infrastructure for:
//! - Playing games between the random, greedy and minimax strategies
//! - Falling back to a random legal move when a strategy has none
//! - Storing match results as JSON and printing reports
//!
//! # Usage
//!
//! ```bash
//! # Ten games of greedy against depth-3 minimax, colors alternating
//! cargo run -p tournament -- match greedy minimax:3 --games 10
//!
//! # Settings from a TOML file, results written as JSON
//! cargo run -p tournament -- match random greedy --config match.toml --out results.json
//! ```

mod config;
mod match_runner;
mod results;
mod strategy;

pub use config::*;
pub use match_runner::*;
pub use results::*;
pub use strategy::*;
