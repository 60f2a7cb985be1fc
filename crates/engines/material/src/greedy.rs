//! Two-ply greedy selection.
//!
//! For each candidate we look at every reply the opponent has and assume they
//! pick the one that is best for them by one-ply material or mate. We then
//! play the candidate whose best reply is least good for the opponent.

use chess_core::{Color, Move, Rules};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::eval::{relative_to, score_board, Score, CHECKMATE};

/// Result of a greedy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyOutcome {
    pub best_move: Option<Move>,
    /// The opponent's best reply value after `best_move`, from the opponent's
    /// point of view. Stays at [`CHECKMATE`] when no move was chosen.
    pub opponent_best: Score,
    /// Positions scored while choosing.
    pub nodes: u64,
}

/// Chooses a move from `moves` on `pos`.
///
/// Candidates are shuffled with `rng` first so ties go to a random member.
/// Returns `None` for an empty list, and also when every candidate lets the
/// opponent mate on the next move.
pub fn select<R: Rules, G: Rng + ?Sized>(pos: &mut R, moves: &[Move], rng: &mut G) -> Option<Move> {
    search(pos, moves, rng).best_move
}

pub fn search<R: Rules, G: Rng + ?Sized>(
    pos: &mut R,
    moves: &[Move],
    rng: &mut G,
) -> GreedyOutcome {
    let opponent = pos.side_to_move().other();
    let mut candidates = moves.to_vec();
    candidates.shuffle(rng);

    let mut nodes = 0;
    let mut opponent_best = CHECKMATE;
    let mut best_move = None;

    for mv in candidates {
        let reply_value = pos.with_move(mv, |p| best_reply(p, opponent, &mut nodes));
        if reply_value < opponent_best {
            opponent_best = reply_value;
            best_move = Some(mv);
        }
    }

    debug!(
        candidates = moves.len(),
        nodes,
        opponent_best,
        best = ?best_move.map(|m| m.to_string()),
        "greedy selection finished"
    );

    GreedyOutcome {
        best_move,
        opponent_best,
        nodes,
    }
}

/// Value of the best single reply for `opponent`, who is to move on `pos`.
fn best_reply<R: Rules>(pos: &mut R, opponent: Color, nodes: &mut u64) -> Score {
    let replies = pos.legal_moves();
    *nodes += 1;
    if replies.status.is_terminal() {
        return relative_to(score_board(pos, replies.status), opponent);
    }

    let mut best = -CHECKMATE;
    for reply in replies.moves {
        let value = pos.with_move(reply, |p| {
            let status = p.legal_moves().status;
            relative_to(score_board(p, status), opponent)
        });
        *nodes += 1;
        if value > best {
            best = value;
        }
    }
    best
}

#[cfg(test)]
#[path = "greedy_tests.rs"]
mod greedy_tests;
