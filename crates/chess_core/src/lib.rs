pub mod board;
pub mod error;
pub mod fen;
pub mod movegen;
pub mod perft;
pub mod rules;
pub mod types;
pub mod uci;


// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::FenError;
pub use movegen::*;
pub use perft::perft;
pub use rules::{MoveGuard, Rules};
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait: implemented by every move-selection strategy
// =============================================================================

/// Trait that all move-selection strategies implement.
///
/// The driver owns the position and the legal-move list for the current turn.
/// It asks exactly one engine per AI turn and applies the returned move itself.
pub trait Engine: Send {
    /// Chooses a move from `legal_moves`, which the driver enumerated on `pos`
    /// immediately beforehand.
    ///
    /// The engine may play and take back moves on `pos` while searching but
    /// must leave it exactly as it found it. `None` means the strategy found
    /// nothing it prefers; the driver then falls back to a random legal move.
    fn select_move(&mut self, pos: &mut Position, legal_moves: &[Move]) -> Option<Move>;

    /// Returns the engine's name for UCI identification
    fn name(&self) -> &str;

    /// Returns the engine's author for UCI identification
    fn author(&self) -> &str {
        "material-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}

    /// Optional: Set a UCI option. Returns true if the option was recognized.
    fn set_option(&mut self, _name: &str, _value: &str) -> bool {
        false
    }
}
