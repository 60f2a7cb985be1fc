use crate::board::{king_deltas, knight_deltas, Position, DIAGONALS, ORTHOGONALS};
use crate::types::*;

impl Position {
    /// Enumerates the legal moves for the side to move and reports whether the
    /// position is checkmate or stalemate.
    ///
    /// The returned status describes this exact position; it goes stale as soon
    /// as a move is made.
    pub fn legal_moves(&mut self) -> LegalMoves {
        let mut moves = Vec::with_capacity(64);
        let status = legal_moves_into(self, &mut moves);
        LegalMoves { moves, status }
    }
}

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
///
/// The position is mutated while filtering but restored before returning.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) -> GameStatus {
    out.clear();
    pseudo_moves(pos, out);

    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.apply(mv);
        let illegal = pos.in_check(mover);
        pos.revert(mv, undo);
        !illegal
    });

    if !out.is_empty() {
        GameStatus::Ongoing
    } else if pos.in_check(mover) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

fn pseudo_moves(pos: &Position, out: &mut Vec<Move>) {
    for (sq, pc) in pos.board.pieces() {
        if pc.color != pos.side_to_move {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(pos, sq, pc, out),
            PieceKind::Knight => gen_steps(pos, sq, pc, out, knight_deltas()),
            PieceKind::Bishop => gen_slider(pos, sq, pc, out, &DIAGONALS),
            PieceKind::Rook => gen_slider(pos, sq, pc, out, &ORTHOGONALS),
            PieceKind::Queen => {
                gen_slider(pos, sq, pc, out, &DIAGONALS);
                gen_slider(pos, sq, pc, out, &ORTHOGONALS);
            }
            PieceKind::King => {
                gen_steps(pos, sq, pc, out, king_deltas());
                gen_castle(pos, sq, pc, out);
            }
        }
    }
}

fn push_pawn_move(from: u8, to: u8, pc: Piece, captured: Option<Piece>, out: &mut Vec<Move>) {
    let promo_rank: i8 = match pc.color {
        Color::White => 7,
        Color::Black => 0,
    };
    if rank_of(to) == promo_rank {
        for pk in PieceKind::PROMOTIONS {
            let mut mv = Move::new(from, to, pc, captured);
            mv.promo = Some(pk);
            out.push(mv);
        }
    } else {
        out.push(Move::new(from, to, pc, captured));
    }
}

fn gen_pawn(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let dir: i8 = match pc.color {
        Color::White => 1,
        Color::Black => -1,
    };
    let start_rank: i8 = match pc.color {
        Color::White => 1,
        Color::Black => 6,
    };

    // forward 1
    if let Some(to) = sq(f, r + dir) {
        if pos.piece_at(to).is_none() {
            push_pawn_move(from, to, pc, None, out);

            // forward 2 from start
            if r == start_rank {
                if let Some(to2) = sq(f, r + 2 * dir) {
                    if pos.piece_at(to2).is_none() {
                        out.push(Move::new(from, to2, pc, None));
                    }
                }
            }
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(target) if target.color != pc.color => {
                push_pawn_move(from, to, pc, Some(target), out);
            }
            Some(_) => {}
            None if pos.en_passant == Some(to) => {
                let victim = Piece::new(pc.color.other(), PieceKind::Pawn);
                let mut mv = Move::new(from, to, pc, Some(victim));
                mv.is_en_passant = true;
                out.push(mv);
            }
            None => {}
        }
    }
}

fn gen_steps(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>, deltas: &[(i8, i8)]) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)))
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>, dirs: &[(i8, i8)]) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, pc, None)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::new(from, to, pc, Some(target)));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

/// One castling option: right flag, rook corner, king destination, squares
/// that must be empty, squares the king crosses (must not be attacked).
struct CastleLane {
    allowed: bool,
    rook_from: u8,
    king_to: u8,
    empty: &'static [u8],
    safe: &'static [u8],
}

fn gen_castle(pos: &Position, from: u8, pc: Piece, out: &mut Vec<Move>) {
    let c = pc.color;
    let (king_from, lanes) = match c {
        Color::White => (
            4u8,
            [
                CastleLane {
                    allowed: pos.castling.wk,
                    rook_from: 7,
                    king_to: 6,
                    empty: &[5, 6],
                    safe: &[5, 6],
                },
                CastleLane {
                    allowed: pos.castling.wq,
                    rook_from: 0,
                    king_to: 2,
                    empty: &[3, 2, 1],
                    safe: &[3, 2],
                },
            ],
        ),
        Color::Black => (
            60u8,
            [
                CastleLane {
                    allowed: pos.castling.bk,
                    rook_from: 63,
                    king_to: 62,
                    empty: &[61, 62],
                    safe: &[61, 62],
                },
                CastleLane {
                    allowed: pos.castling.bq,
                    rook_from: 56,
                    king_to: 58,
                    empty: &[59, 58, 57],
                    safe: &[59, 58],
                },
            ],
        ),
    };
    if from != king_from {
        return;
    }

    // Can't castle out of/through check: check squares must not be attacked.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    for lane in lanes {
        if !lane.allowed || pos.piece_at(lane.rook_from) != Some(Piece::new(c, PieceKind::Rook)) {
            continue;
        }
        if lane.empty.iter().any(|&s| pos.piece_at(s).is_some()) {
            continue;
        }
        if lane.safe.iter().any(|&s| pos.is_square_attacked(s, enemy)) {
            continue;
        }
        let mut mv = Move::new(from, lane.king_to, pc, None);
        mv.is_castle = true;
        out.push(mv);
    }
}
