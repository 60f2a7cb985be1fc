//! Property-based tests for the evaluation and both selectors.

use chess_core::{Board, Color, Piece, PieceKind, Position};
use material_engine::{greedy, minimax, score_material};
use proptest::prelude::*;
use rand::prelude::*;

fn arb_piece() -> impl Strategy<Value = Piece> {
    (any::<bool>(), 0usize..6).prop_map(|(white, kind)| {
        let color = if white { Color::White } else { Color::Black };
        Piece::new(color, PieceKind::ALL[kind])
    })
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::option::of(arb_piece()), 64).prop_map(|cells| {
        let mut board = Board::empty();
        for (sq, pc) in cells.into_iter().enumerate() {
            board.set(sq as u8, pc);
        }
        board
    })
}

fn random_position(seed: u64, plies: usize) -> Position {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos = Position::startpos();
    for _ in 0..plies {
        let legal = pos.legal_moves();
        let Some(&mv) = legal.moves.choose(&mut rng) else {
            break;
        };
        pos.make_move(mv);
    }
    pos
}

proptest! {
    /// Property: swapping every piece's colour negates the material score
    #[test]
    fn prop_material_is_antisymmetric(board in arb_board()) {
        prop_assert_eq!(score_material(&board.color_swapped()), -score_material(&board));
    }

    /// Property: the greedy choice is legal and the position is restored
    #[test]
    fn prop_greedy_is_legal_and_balanced(seed in any::<u64>(), plies in 0usize..30) {
        let mut pos = random_position(seed, plies);
        let snapshot = pos.clone();
        let moves = pos.legal_moves().moves;
        let mut rng = StdRng::seed_from_u64(seed);

        if let Some(mv) = greedy::select(&mut pos, &moves, &mut rng) {
            prop_assert!(moves.contains(&mv));
        }
        prop_assert_eq!(&pos, &snapshot);
    }

    /// Property: minimax picks a supplied move whenever one exists
    #[test]
    fn prop_minimax_is_legal_and_balanced(seed in any::<u64>(), plies in 0usize..30) {
        let mut pos = random_position(seed, plies);
        let snapshot = pos.clone();
        let moves = pos.legal_moves().moves;

        let chosen = minimax::select_root(&mut pos, &moves, 2);
        prop_assert_eq!(chosen.is_some(), !moves.is_empty());
        if let Some(mv) = chosen {
            prop_assert!(moves.contains(&mv));
        }
        prop_assert_eq!(&pos, &snapshot);
    }
}
