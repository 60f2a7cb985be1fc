use super::*;
use std::collections::HashSet;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::with_seed(3);
    let mut pos = Position::startpos();
    let moves = pos.legal_moves().moves;

    let mv = engine.select_move(&mut pos, &moves);

    assert!(mv.is_some_and(|m| moves.contains(&m)));
    assert_eq!(pos, Position::startpos());
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::with_seed(0);
    let mut pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    let moves = pos.legal_moves().moves;

    assert_eq!(engine.select_move(&mut pos, &moves), None);
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::with_seed(0);
    let mut pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    let moves = pos.legal_moves().moves;

    assert_eq!(engine.select_move(&mut pos, &moves), None);
}

#[test]
fn pick_single_move() {
    let mut pos = Position::startpos();
    let only = pos.legal_moves().moves[5];
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..10 {
        assert_eq!(pick(&[only], &mut rng), only);
    }
}

#[test]
fn pick_reaches_every_move() {
    let mut pos = Position::startpos();
    let moves = pos.legal_moves().moves;
    let mut rng = StdRng::seed_from_u64(2024);
    let seen: HashSet<Move> = (0..2000).map(|_| pick(&moves, &mut rng)).collect();
    assert_eq!(seen.len(), moves.len());
}

#[test]
fn same_seed_same_sequence() {
    let mut pos = Position::startpos();
    let moves = pos.legal_moves().moves;
    let mut a = RandomEngine::with_seed(17);
    let mut b = RandomEngine::new();
    assert!(b.set_option("Seed", "17"));
    for _ in 0..20 {
        assert_eq!(a.pick(&moves), b.pick(&moves));
    }
}

#[test]
#[should_panic(expected = "empty move list")]
fn pick_panics_on_empty_list() {
    let mut rng = StdRng::seed_from_u64(0);
    pick(&[], &mut rng);
}
