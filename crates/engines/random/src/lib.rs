//! Random Move Chess Engine
//!
//! Picks uniformly among the legal moves it is handed. The other selectors
//! fall back to it whenever they come back without a move.

use chess_core::{Engine, Move, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// Uniform choice from `moves`.
///
/// # Panics
/// If `moves` is empty. Callers only ask for a move on a non-terminal
/// position, which always has at least one.
pub fn pick<G: Rng + ?Sized>(moves: &[Move], rng: &mut G) -> Move {
    assert!(!moves.is_empty(), "random pick from an empty move list");
    moves[rng.gen_range(0..moves.len())]
}

/// A chess engine that plays random legal moves.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws one move with this engine's generator.
    pub fn pick(&mut self, moves: &[Move]) -> Move {
        pick(moves, &mut self.rng)
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, _pos: &mut Position, legal_moves: &[Move]) -> Option<Move> {
        if legal_moves.is_empty() {
            return None;
        }
        Some(self.pick(legal_moves))
    }

    fn name(&self) -> &str {
        "Random v1.0"
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
