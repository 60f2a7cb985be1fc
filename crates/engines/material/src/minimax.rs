//! Fixed-depth minimax over material.
//!
//! White maximizes the White-positive score and Black minimizes it. There is
//! no pruning and no move ordering: moves are tried in the order given and the
//! first one reaching the best value wins ties.

use chess_core::{Move, Rules};
use tracing::debug;

use crate::eval::{score_material, Objective, Score};

/// Search depth in plies used when none is configured.
pub const DEFAULT_DEPTH: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    /// White-positive value of the root.
    pub score: Score,
    /// Moves played during the search.
    pub nodes: u64,
}

/// Best move for the side to move on `pos`, searched `depth` plies deep.
pub fn select_root<R: Rules>(pos: &mut R, moves: &[Move], depth: u8) -> Option<Move> {
    search(pos, moves, depth).best_move
}

pub fn search<R: Rules>(pos: &mut R, moves: &[Move], depth: u8) -> SearchOutcome {
    let objective = Objective::for_side(pos.side_to_move());
    let mut nodes = 0;
    let (score, best_move) = evaluate_counted(pos, moves, depth, objective, &mut nodes);

    debug!(
        depth,
        nodes,
        score,
        best = ?best_move.map(|m| m.to_string()),
        "minimax search finished"
    );

    SearchOutcome {
        best_move,
        score,
        nodes,
    }
}

/// Minimax value of `pos` with `moves` available, and the move reaching it.
///
/// At depth 0 this is plain material, even on a mated or stalemated position.
/// A node with no moves above depth 0 keeps the objective's sentinel, so a
/// side left without moves is scored as lost whether it is mated or not.
pub fn evaluate<R: Rules>(
    pos: &mut R,
    moves: &[Move],
    depth: u8,
    objective: Objective,
) -> (Score, Option<Move>) {
    let mut nodes = 0;
    evaluate_counted(pos, moves, depth, objective, &mut nodes)
}

fn evaluate_counted<R: Rules>(
    pos: &mut R,
    moves: &[Move],
    depth: u8,
    objective: Objective,
    nodes: &mut u64,
) -> (Score, Option<Move>) {
    if depth == 0 {
        return (score_material(pos.board()), None);
    }

    let mut best = objective.sentinel();
    let mut best_move = None;

    for &mv in moves {
        let (score, _) = pos.with_move(mv, |p| {
            *nodes += 1;
            let replies = p.legal_moves().moves;
            evaluate_counted(p, &replies, depth - 1, objective.flip(), &mut *nodes)
        });
        if objective.improves(score, best) {
            best = score;
            best_move = Some(mv);
        }
    }

    (best, best_move)
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
