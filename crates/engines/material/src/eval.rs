//! Material evaluation and terminal-position scoring.
//!
//! Every score here is White-positive: a positive value is good for White and
//! a negative value is good for Black, whoever is to move.

use chess_core::{Board, Color, GameStatus, PieceKind, Rules};

pub type Score = i32;

/// Magnitude of a forced-mate score. Larger than any material total.
pub const CHECKMATE: Score = 1000;
pub const STALEMATE: Score = 0;

/// Material value of a piece kind in pawn units. Kings are never traded so
/// they count for nothing.
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 10,
        PieceKind::King => 0,
    }
}

/// Sum of White's material minus sum of Black's material.
pub fn score_material(board: &Board) -> Score {
    board
        .pieces()
        .map(|(_, pc)| match pc.color {
            Color::White => piece_value(pc.kind),
            Color::Black => -piece_value(pc.kind),
        })
        .sum()
}

/// Scores a position whose terminal status is already known.
///
/// A mate is scored for the side that delivered it, a stalemate as a draw and
/// anything else by material.
pub fn score_board<R: Rules>(pos: &R, status: GameStatus) -> Score {
    match status {
        GameStatus::Checkmate => match pos.side_to_move() {
            Color::White => -CHECKMATE,
            Color::Black => CHECKMATE,
        },
        GameStatus::Stalemate => STALEMATE,
        GameStatus::Ongoing => score_material(pos.board()),
    }
}

/// Re-expresses a White-positive score from `side`'s point of view.
pub fn relative_to(score: Score, side: Color) -> Score {
    match side {
        Color::White => score,
        Color::Black => -score,
    }
}

/// Direction in which a side pushes the White-positive score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Maximize,
    Minimize,
}

impl Objective {
    pub fn for_side(side: Color) -> Self {
        match side {
            Color::White => Objective::Maximize,
            Color::Black => Objective::Minimize,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }

    /// Worst possible value for this objective. A node with no moves keeps it.
    pub fn sentinel(self) -> Score {
        match self {
            Objective::Maximize => -CHECKMATE,
            Objective::Minimize => CHECKMATE,
        }
    }

    /// Strict comparison: equal scores never replace the incumbent.
    pub fn improves(self, candidate: Score, best: Score) -> bool {
        match self {
            Objective::Maximize => candidate > best,
            Objective::Minimize => candidate < best,
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
