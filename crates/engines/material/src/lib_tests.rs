use super::*;
use chess_core::Position;

#[test]
fn greedy_engine_returns_legal_move() {
    let mut engine = GreedyEngine::with_seed(1);
    let mut pos = Position::startpos();
    let moves = pos.legal_moves().moves;

    let mv = engine.select_move(&mut pos, &moves);

    assert!(mv.is_some_and(|m| moves.contains(&m)));
    assert!(engine.nodes() > 0);
    assert_eq!(pos, Position::startpos());
}

#[test]
fn greedy_engine_seed_option_reseeds() {
    let mut pos = Position::startpos();
    let moves = pos.legal_moves().moves;

    let mut a = GreedyEngine::new();
    assert!(a.set_option("Seed", "99"));
    let mut b = GreedyEngine::with_seed(99);
    assert_eq!(a.select_move(&mut pos, &moves), b.select_move(&mut pos, &moves));

    assert!(!a.set_option("Seed", "abc"));
    assert!(!a.set_option("Depth", "3"));
}

#[test]
fn minimax_engine_defaults_to_depth_two() {
    let engine = MinimaxEngine::default();
    assert_eq!(engine.depth(), DEFAULT_DEPTH);
    assert_eq!(engine.name(), "Minimax v1.0");
}

#[test]
fn minimax_engine_depth_option_is_bounded() {
    let mut engine = MinimaxEngine::new();
    assert!(engine.set_option("Depth", "3"));
    assert_eq!(engine.depth(), 3);
    assert!(!engine.set_option("Depth", "0"));
    assert!(!engine.set_option("depth", "7"));
    assert!(!engine.set_option("Hash", "16"));
    assert_eq!(engine.depth(), 3);
}

#[test]
fn engines_return_none_without_moves() {
    let mut pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    let moves = pos.legal_moves().moves;
    assert!(moves.is_empty());

    assert_eq!(GreedyEngine::with_seed(0).select_move(&mut pos, &moves), None);
    assert_eq!(MinimaxEngine::new().select_move(&mut pos, &moves), None);
}
