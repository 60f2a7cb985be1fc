//! The narrow interface a move selector needs from a rules implementation.
//!
//! Selectors never construct positions. They borrow one exclusively, play
//! moves on it, and must undo every move before returning. [`Rules::with_move`]
//! ties each make to its undo so the pairing cannot be forgotten on any exit
//! path.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Position};
use crate::types::{Color, LegalMoves, Move};

pub trait Rules {
    /// Read-only 8x8 view used for evaluation.
    fn board(&self) -> &Board;

    fn side_to_move(&self) -> Color;

    /// Legal moves for the side to move, with the terminal status of this exact
    /// position.
    fn legal_moves(&mut self) -> LegalMoves;

    fn make_move(&mut self, mv: Move);

    /// Reverts the most recent [`Rules::make_move`]. Returns `None` when there is
    /// nothing to undo.
    fn undo_move(&mut self) -> Option<Move>;

    /// Plays `mv`, runs `f` on the resulting position and undoes `mv` again,
    /// also when `f` unwinds.
    fn with_move<T>(&mut self, mv: Move, f: impl FnOnce(&mut Self) -> T) -> T
    where
        Self: Sized,
    {
        let mut guard = MoveGuard::new(self, mv);
        f(&mut *guard)
    }
}

/// Exclusive borrow of a position with one move played on it. Dropping the
/// guard undoes that move.
pub struct MoveGuard<'a, R: Rules> {
    pos: &'a mut R,
}

impl<'a, R: Rules> MoveGuard<'a, R> {
    pub fn new(pos: &'a mut R, mv: Move) -> Self {
        pos.make_move(mv);
        Self { pos }
    }
}

impl<R: Rules> Deref for MoveGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.pos
    }
}

impl<R: Rules> DerefMut for MoveGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.pos
    }
}

impl<R: Rules> Drop for MoveGuard<'_, R> {
    fn drop(&mut self) {
        self.pos.undo_move();
    }
}

impl Rules for Position {
    fn board(&self) -> &Board {
        &self.board
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn legal_moves(&mut self) -> LegalMoves {
        Position::legal_moves(self)
    }

    fn make_move(&mut self, mv: Move) {
        Position::make_move(self, mv)
    }

    fn undo_move(&mut self) -> Option<Move> {
        Position::undo_move(self)
    }
}
