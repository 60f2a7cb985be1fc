use super::*;
use crate::eval::CHECKMATE;
use crate::test_tree::{tag_move, TreeGame};
use chess_core::{coord_to_sq, GameStatus, Position};

// White queen against a black rook: +5 for White.
const WHITE_UP: &str = "r3k3/8/8/8/8/8/8/3QK3 w - - 0 1";
const BLACK_TO_MOVE: &str = "r3k3/8/8/8/8/8/8/3QK3 b - - 0 1";

fn find(pos: &mut Position, from: &str, to: &str) -> Move {
    let from = coord_to_sq(from).unwrap();
    let to = coord_to_sq(to).unwrap();
    pos.legal_moves()
        .moves
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap()
}

#[test]
fn test_depth_zero_is_material_for_both_objectives() {
    let mut pos = Position::from_fen("k7/8/8/3q4/8/8/8/3RK3 w - - 0 1").unwrap();
    let moves = pos.legal_moves().moves;
    for objective in [Objective::Maximize, Objective::Minimize] {
        assert_eq!(evaluate(&mut pos, &moves, 0, objective), (-5, None));
    }
}

#[test]
fn test_startpos_depth_two_is_level() {
    let mut pos = Position::startpos();
    let before = pos.clone();
    let moves = pos.legal_moves().moves;
    let outcome = search(&mut pos, &moves, DEFAULT_DEPTH);
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.nodes, 20 + 400);
    // All moves tie, so the first one supplied is kept.
    assert_eq!(outcome.best_move, Some(moves[0]));
    assert_eq!(pos, before);
}

#[test]
fn test_empty_move_list_has_no_move() {
    let mut pos = Position::startpos();
    assert_eq!(select_root(&mut pos, &[], 2), None);
    assert_eq!(evaluate(&mut pos, &[], 2, Objective::Maximize), (-CHECKMATE, None));
    assert_eq!(evaluate(&mut pos, &[], 2, Objective::Minimize), (CHECKMATE, None));
}

#[test]
fn test_wins_the_queen() {
    let mut pos = Position::from_fen("k7/8/8/3q4/8/8/8/3RK3 w - - 0 1").unwrap();
    let capture = find(&mut pos, "d1", "d5");
    let moves = pos.legal_moves().moves;
    for depth in 1..=2 {
        let outcome = search(&mut pos, &moves, depth);
        assert_eq!(outcome.best_move, Some(capture));
        assert_eq!(outcome.score, 5);
    }
}

#[test]
fn test_black_minimizes() {
    let mut pos = Position::from_fen("3rk3/8/8/8/3Q4/8/8/K7 b - - 0 1").unwrap();
    let capture = find(&mut pos, "d8", "d4");
    let moves = pos.legal_moves().moves;
    let outcome = search(&mut pos, &moves, 2);
    assert_eq!(outcome.best_move, Some(capture));
    assert_eq!(outcome.score, -5);
}

#[test]
fn test_finds_mate_in_one() {
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mate = find(&mut pos, "e1", "e8");
    let moves = pos.legal_moves().moves;
    let outcome = search(&mut pos, &moves, 2);
    assert_eq!(outcome.best_move, Some(mate));
    assert_eq!(outcome.score, CHECKMATE);
}

#[test]
fn test_is_deterministic() {
    let mut pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    let moves = pos.legal_moves().moves;
    let first = select_root(&mut pos, &moves, 2);
    let second = select_root(&mut pos, &moves, 2);
    assert!(first.is_some_and(|m| moves.contains(&m)));
    assert_eq!(first, second);
}

#[test]
fn test_moveless_inner_node_keeps_sentinel() {
    // Stalemating the opponent is scored like mating them above depth 0.
    let mut tree = TreeGame::new(WHITE_UP);
    let keep = tree.add(TreeGame::ROOT, 0, BLACK_TO_MOVE, GameStatus::Ongoing);
    tree.add(keep, 10, WHITE_UP, GameStatus::Ongoing);
    tree.add(TreeGame::ROOT, 1, BLACK_TO_MOVE, GameStatus::Stalemate);

    let moves = tree.moves_at(TreeGame::ROOT);
    let outcome = search(&mut tree, &moves, 2);
    assert_eq!(outcome.best_move, Some(tag_move(1)));
    assert_eq!(outcome.score, CHECKMATE);
    assert_eq!(tree.depth(), 0);
}

#[test]
fn test_ties_go_to_first_supplied_move() {
    let mut tree = TreeGame::new(WHITE_UP);
    for tag in 0..3 {
        let child = tree.add(TreeGame::ROOT, tag, BLACK_TO_MOVE, GameStatus::Ongoing);
        tree.add(child, 10 + tag, WHITE_UP, GameStatus::Ongoing);
    }

    let mut moves = tree.moves_at(TreeGame::ROOT);
    assert_eq!(select_root(&mut tree, &moves, 2), Some(tag_move(0)));
    moves.reverse();
    assert_eq!(select_root(&mut tree, &moves, 2), Some(tag_move(2)));
}

#[test]
fn test_root_has_no_move_when_every_line_ends_without_moves() {
    // From depth 3 a maximizing node with no moves hands -CHECKMATE to the
    // root, which never beats its own sentinel.
    let mut tree = TreeGame::new(WHITE_UP);
    let reply = tree.add(TreeGame::ROOT, 0, BLACK_TO_MOVE, GameStatus::Ongoing);
    tree.add(reply, 10, WHITE_UP, GameStatus::Checkmate);

    let moves = tree.moves_at(TreeGame::ROOT);
    let outcome = search(&mut tree, &moves, 3);
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, -CHECKMATE);
    assert_eq!(tree.depth(), 0);

    assert_eq!(select_root(&mut tree, &moves, 2), Some(tag_move(0)));
}
