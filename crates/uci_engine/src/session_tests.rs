use super::*;

fn run(session: &mut Session, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        session.handle(line, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

#[test]
fn test_uci_handshake_lists_options() {
    let mut session = Session::new();
    let out = run(&mut session, &["uci", "isready"]);
    assert!(out.contains("option name Strategy type combo"));
    assert!(out.contains("option name Depth type spin default 2 min 1 max 6"));
    assert!(out.contains("uciok"));
    assert!(out.ends_with("readyok\n"));
}

#[test]
fn test_go_returns_legal_move_for_each_strategy() {
    for strategy in ["random", "greedy", "minimax"] {
        let mut session = Session::new();
        let cmd = format!("setoption name Strategy value {}", strategy);
        let out = run(&mut session, &[&cmd, "position startpos moves e2e4", "go"]);

        let reply = out.trim().strip_prefix("bestmove ").unwrap();
        let mut pos = session.position().clone();
        assert!(chess_core::parse_uci_move(&pos, reply).is_some(), "{}: {}", strategy, reply);
        assert_eq!(pos.legal_moves().moves.len(), 20);
    }
}

#[test]
fn test_minimax_finds_mate() {
    let mut session = Session::new();
    let out = run(
        &mut session,
        &[
            "setoption name Depth value 2",
            "position fen 6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1",
            "go",
        ],
    );
    assert_eq!(out, "bestmove e1e8\n");
}

#[test]
fn test_go_on_finished_game() {
    let mut session = Session::new();
    let out = run(
        &mut session,
        &["position fen k7/2K5/1Q6/8/8/8/8/8 b - - 0 1", "go"],
    );
    assert_eq!(out, "bestmove 0000\n");
}

#[test]
fn test_bad_options_are_ignored() {
    let mut session = Session::new();
    run(
        &mut session,
        &[
            "setoption name Depth value 9",
            "setoption name Strategy value alphabeta",
            "setoption name Depth",
        ],
    );
    assert_eq!(session.depth, 2);
    assert_eq!(session.strategy, "minimax");
}

#[test]
fn test_bad_fen_keeps_position() {
    let mut session = Session::new();
    run(&mut session, &["position startpos moves e2e4", "position fen not/a/fen w"]);
    assert_eq!(session.position().history_len(), 1);
}

#[test]
fn test_quit_stops() {
    let mut session = Session::new();
    let mut out = Vec::new();
    assert!(session.handle("", &mut out).unwrap());
    assert!(!session.handle("quit", &mut out).unwrap());
}
