use std::fmt;

use crate::types::*;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) fn knight_deltas() -> &'static [(i8, i8)] {
    &KNIGHT_DELTAS
}

pub(crate) fn king_deltas() -> &'static [(i8, i8)] {
    &KING_DELTAS
}

/// Fixed 8x8 grid. Square 0 is a1, square 63 is h8.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const EMPTY_CODE: &'static str = "--";

    pub fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Builds a board from rows of two-symbol codes, rank 8 first, `--` for empty.
    pub fn from_codes(rows: [[&str; 8]; 8]) -> Option<Self> {
        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx as i8;
            for (file, code) in row.iter().enumerate() {
                if *code == Self::EMPTY_CODE {
                    continue;
                }
                let piece = Piece::from_code(code)?;
                board.set(sq(file as i8, rank)?, Some(piece));
            }
        }
        Some(board)
    }

    #[inline]
    pub fn get(&self, sq: u8) -> Option<Piece> {
        self.cells[sq as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: u8, pc: Option<Piece>) {
        self.cells[sq as usize] = pc;
    }

    #[inline]
    pub fn take(&mut self, sq: u8) -> Option<Piece> {
        self.cells[sq as usize].take()
    }

    /// All occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (i as u8, pc)))
    }

    /// The same board with every piece handed to the other color.
    pub fn color_swapped(&self) -> Board {
        let mut out = Board::empty();
        for (sq, pc) in self.pieces() {
            out.set(sq, Some(pc.swapped()));
        }
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.pieces()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                if file > 0 {
                    write!(f, " ")?;
                }
                match self.get(rank * 8 + file) {
                    Some(pc) => write!(f, "{pc}")?,
                    None => write!(f, "{}", Self::EMPTY_CODE)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    history: Vec<(Move, Undo)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(u8, u8)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<u8>,  // square actually captured in en-passant
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    /// A position with the given board and nothing else set: no castling
    /// rights, no en-passant square, fresh clocks.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Position {
            board,
            side_to_move,
            castling: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::from_board(Board::empty(), Color::White);
        p.castling = CastlingRights::all();

        for f in 0..8 {
            p.board
                .set(8 + f, Some(Piece::new(Color::White, PieceKind::Pawn)));
            p.board
                .set(48 + f, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board.set(f as u8, Some(Piece::new(Color::White, kind)));
            p.board.set(56 + f as u8, Some(Piece::new(Color::Black, kind)));
        }
        p
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board.get(sq)
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.board.king_sq(c)
    }

    pub fn in_check(&self, c: Color) -> bool {
        match self.king_sq(c) {
            Some(ksq) => self.is_square_attacked(ksq, c.other()),
            None => false,
        }
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Number of moves currently on the undo stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|(mv, _)| *mv)
    }

    /// Moves played since the position was set up, oldest first.
    pub fn move_log(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|(mv, _)| *mv)
    }

    fn holds(&self, s: u8, by: Color, kinds: &[PieceKind]) -> bool {
        matches!(self.piece_at(s), Some(pc) if pc.color == by && kinds.contains(&pc.kind))
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A white pawn attacks upward, so it sits one rank below its target.
        let pawn_rank = match by {
            Color::White => -1,
            Color::Black => 1,
        };
        for df in [-1, 1] {
            if let Some(s) = sq(tf + df, tr + pawn_rank) {
                if self.holds(s, by, &[PieceKind::Pawn]) {
                    return true;
                }
            }
        }

        for (df, dr) in knight_deltas() {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.holds(s, by, &[PieceKind::Knight]) {
                    return true;
                }
            }
        }

        for (df, dr) in king_deltas() {
            if let Some(s) = sq(tf + df, tr + dr) {
                if self.holds(s, by, &[PieceKind::King]) {
                    return true;
                }
            }
        }

        let rays = DIAGONALS
            .iter()
            .map(|d| (d, [PieceKind::Bishop, PieceKind::Queen]))
            .chain(
                ORTHOGONALS
                    .iter()
                    .map(|d| (d, [PieceKind::Rook, PieceKind::Queen])),
            );
        for ((df, dr), sliders) in rays {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(s) = sq(f, r) {
                if self.piece_at(s).is_some() {
                    if self.holds(s, by, &sliders) {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }

        false
    }

    /// Applies `mv` and pushes it onto the undo stack.
    ///
    /// `mv` must come from [`Position::legal_moves`] on this exact position.
    pub fn make_move(&mut self, mv: Move) {
        let undo = self.apply(mv);
        self.history.push((mv, undo));
    }

    /// Pops the most recent move and restores the position exactly as it was
    /// before that move. Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let (mv, undo) = self.history.pop()?;
        self.revert(mv, undo);
        Some(mv)
    }

    pub(crate) fn apply(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = mv.piece;
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        // Halfmove clock reset on capture or pawn move
        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let dir = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(to), rank_of(to) + dir) {
                captured = self.board.take(cs);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        self.board.set(from, None);
        self.board.set(to, Some(moved));

        if moved.kind == PieceKind::Pawn {
            let r = rank_of(to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                let promo = mv.promo.unwrap_or(PieceKind::Queen);
                self.board.set(to, Some(Piece::new(moved.color, promo)));
            }
        }

        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            // White: e1->g1 rook h1->f1, e1->c1 rook a1->d1
            // Black: e8->g8 rook h8->f8, e8->c8 rook a8->d8
            let rook_squares = match (moved.color, from, to) {
                (Color::White, 4, 6) => Some((7, 5)),
                (Color::White, 4, 2) => Some((0, 3)),
                (Color::Black, 60, 62) => Some((63, 61)),
                (Color::Black, 60, 58) => Some((56, 59)),
                _ => None,
            };
            if let Some((rf, rt)) = rook_squares {
                let rook = self.board.take(rf);
                self.board.set(rt, rook);
                rook_move = Some((rf, rt));
            }
        }

        self.update_castling_rights(moved, from, to, captured);

        // Double pawn push sets en-passant square
        if moved.kind == PieceKind::Pawn {
            let fr = rank_of(from);
            let tr = rank_of(to);
            if (moved.color == Color::White && fr == 1 && tr == 3)
                || (moved.color == Color::Black && fr == 6 && tr == 4)
            {
                self.en_passant = sq(file_of(from), (fr + tr) / 2);
            }
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    fn update_castling_rights(&mut self, moved: Piece, from: u8, to: u8, captured: Option<Piece>) {
        match (moved.color, moved.kind) {
            (Color::White, PieceKind::King) => {
                self.castling.wk = false;
                self.castling.wq = false;
            }
            (Color::Black, PieceKind::King) => {
                self.castling.bk = false;
                self.castling.bq = false;
            }
            _ => {}
        }
        // A rook leaving its corner, or being captured on it, loses that side's right.
        let captured_rook_sq = match captured {
            Some(cp) if cp.kind == PieceKind::Rook => Some(to),
            _ => None,
        };
        for s in std::iter::once(from).chain(captured_rook_sq) {
            match s {
                0 => self.castling.wq = false,
                7 => self.castling.wk = false,
                56 => self.castling.bq = false,
                63 => self.castling.bk = false,
                _ => {}
            }
        }
    }

    pub(crate) fn revert(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.board.take(rt);
            self.board.set(rf, rook);
        }

        // The moved piece goes back as it was, which also reverts a promotion.
        self.board.set(mv.to, None);
        self.board.set(mv.from, Some(undo.moved_piece));

        match undo.ep_captured_sq {
            Some(cs) => self.board.set(cs, undo.captured),
            None => self.board.set(mv.to, undo.captured),
        }
    }
}
