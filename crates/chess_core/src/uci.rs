use crate::{board::Position, error::FenError, movegen::legal_moves, types::*};

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    // We parse and then match against legal moves so flags (castle/ep) are correct.
    if txt.len() < 4 || !txt.is_ascii() {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt.as_bytes().get(4) {
        Some(ch) => Some(match ch.to_ascii_lowercase() {
            b'q' => PieceKind::Queen,
            b'r' => PieceKind::Rook,
            b'b' => PieceKind::Bishop,
            b'n' => PieceKind::Knight,
            _ => return None,
        }),
        None => None,
    };

    // A bare promotion like "e7e8" means the queen.
    let promo = promo.or_else(|| {
        let pc = pos.piece_at(from)?;
        let last_rank = matches!((pc.color, rank_of(to)), (Color::White, 7) | (Color::Black, 0));
        (pc.kind == PieceKind::Pawn && last_rank).then_some(PieceKind::Queen)
    });

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promo == promo)
}

/// Applies the arguments of a UCI `position` command.
///
/// Supports `startpos` and `fen <fields...>`, each optionally followed by
/// `moves <m1> <m2> ...`. Unparseable moves stop move replay.
pub fn set_position_from_uci(pos: &mut Position, args: &[&str]) -> Result<(), FenError> {
    let moves_idx = args.iter().position(|&a| a == "moves");
    let setup = &args[..moves_idx.unwrap_or(args.len())];

    *pos = match setup.split_first() {
        Some((&"fen", fields)) => Position::from_fen(&fields.join(" "))?,
        _ => Position::startpos(),
    };

    if let Some(idx) = moves_idx {
        for txt in &args[idx + 1..] {
            match parse_uci_move(pos, txt) {
                Some(mv) => pos.make_move(mv),
                None => break,
            }
        }
    }
    Ok(())
}
