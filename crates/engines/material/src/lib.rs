//! Material Chess Engines
//!
//! Two move selectors built on a material-only evaluation:
//! - [`GreedyEngine`]: two-ply greedy choice with random tie-breaking
//! - [`MinimaxEngine`]: fixed-depth minimax without pruning
//!
//! Both work against the [`chess_core::Rules`] interface and leave the position
//! exactly as they found it.

pub mod eval;
pub mod greedy;
pub mod minimax;

#[cfg(test)]
mod test_tree;

use chess_core::{Engine, Move, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub use eval::{
    piece_value, relative_to, score_board, score_material, Objective, Score, CHECKMATE, STALEMATE,
};
pub use greedy::GreedyOutcome;
pub use minimax::{SearchOutcome, DEFAULT_DEPTH};

/// Highest depth accepted through [`Engine::set_option`].
pub const MAX_DEPTH: u8 = 6;

/// Plays the move that leaves the opponent the weakest best reply.
#[derive(Debug, Clone)]
pub struct GreedyEngine {
    rng: StdRng,
    nodes: u64,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    /// Engine whose tie-breaking is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    /// Positions scored during the last selection.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn select_move(&mut self, pos: &mut Position, legal_moves: &[Move]) -> Option<Move> {
        let outcome = greedy::search(pos, legal_moves, &mut self.rng);
        self.nodes = outcome.nodes;
        outcome.best_move
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("seed") {
            return false;
        }
        match value.trim().parse::<u64>() {
            Ok(seed) => {
                self.rng = StdRng::seed_from_u64(seed);
                true
            }
            Err(_) => false,
        }
    }
}

/// Fixed-depth minimax over material.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    pub fn with_depth(depth: u8) -> Self {
        Self { depth, nodes: 0 }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn select_move(&mut self, pos: &mut Position, legal_moves: &[Move]) -> Option<Move> {
        let outcome = minimax::search(pos, legal_moves, self.depth);
        self.nodes = outcome.nodes;
        outcome.best_move
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }

    fn set_option(&mut self, name: &str, value: &str) -> bool {
        if !name.eq_ignore_ascii_case("depth") {
            return false;
        }
        match value.trim().parse::<u8>() {
            Ok(depth) if (1..=MAX_DEPTH).contains(&depth) => {
                debug!(depth, "minimax depth set");
                self.depth = depth;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod lib_tests;
