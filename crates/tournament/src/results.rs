//! Game and match results, storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConfigError, MatchConfig};

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same result seen by the other player.
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }

    /// Conventional notation when `self` is White's result.
    pub fn notation(self) -> &'static str {
        match self {
            GameResult::Win => "1-0",
            GameResult::Loss => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    MoveLimit,
}

/// Record of one finished game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    /// From White's point of view
    pub result: GameResult,
    pub termination: Termination,
    /// Moves in UCI notation
    pub moves: Vec<String>,
    /// Turns on which the engine gave no usable move and a random one was played
    pub fallbacks: u32,
    pub final_fen: String,
}

impl GameRecord {
    pub fn plies(&self) -> usize {
        self.moves.len()
    }
}

/// Result of a match (multiple games), from engine 1's point of view
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub engine1: String,
    pub engine2: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub games: Vec<GameRecord>,
}

impl MatchResult {
    pub fn new(engine1: &str, engine2: &str) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            ..Default::default()
        }
    }

    pub fn record(&mut self, engine1_result: GameResult, game: GameRecord) {
        match engine1_result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
        self.games.push(game);
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Points per game for engine 1, counting a draw as half.
    pub fn score(&self) -> f64 {
        let total = self.total_games();
        if total == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total as f64
    }
}

/// A match together with the configuration it was played under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub config: MatchConfig,
    pub result: MatchResult,
}

impl MatchReport {
    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let result = &self.result;
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} vs {} ===\n\n",
            result.engine1, result.engine2
        ));
        report.push_str(&format!(
            "Config: {} games, depth {}, max {} plies\n\n",
            self.config.games, self.config.depth, self.config.max_moves
        ));

        report.push_str(&format!(
            "{:<4} {:<16} {:<16} {:<8} {:<16} {:>5}\n",
            "#", "White", "Black", "Result", "Termination", "Plies"
        ));
        report.push_str(&"-".repeat(70));
        report.push('\n');

        for (i, game) in result.games.iter().enumerate() {
            report.push_str(&format!(
                "{:<4} {:<16} {:<16} {:<8} {:<16} {:>5}\n",
                i + 1,
                game.white,
                game.black,
                game.result.notation(),
                format!("{:?}", game.termination),
                game.plies()
            ));
        }

        report.push_str(&format!(
            "\n{}: {} wins, {} losses, {} draws ({:.1}%)\n",
            result.engine1,
            result.wins,
            result.losses,
            result.draws,
            result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
