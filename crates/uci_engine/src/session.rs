//! UCI command handling, kept apart from stdin/stdout so it can be driven in tests.

use std::io::{self, Write};

use chess_core::{move_to_uci, set_position_from_uci, Engine, Position};
use material_engine::{GreedyEngine, MinimaxEngine, DEFAULT_DEPTH, MAX_DEPTH};
use random_engine::RandomEngine;
use tracing::{debug, warn};

const STRATEGIES: [&str; 3] = ["random", "greedy", "minimax"];

pub struct Session {
    pos: Position,
    strategy: &'static str,
    depth: u8,
    engine: Box<dyn Engine>,
    fallback: RandomEngine,
}

impl Session {
    pub fn new() -> Self {
        Self {
            pos: Position::startpos(),
            strategy: "minimax",
            depth: DEFAULT_DEPTH,
            engine: Box::new(MinimaxEngine::with_depth(DEFAULT_DEPTH)),
            fallback: RandomEngine::new(),
        }
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    fn rebuild_engine(&mut self) {
        self.engine = match self.strategy {
            "random" => Box::new(RandomEngine::new()),
            "greedy" => Box::new(GreedyEngine::new()),
            _ => Box::new(MinimaxEngine::with_depth(self.depth)),
        };
    }

    /// Handles one input line. Returns `Ok(false)` once the GUI asked to quit.
    pub fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(true);
        };

        match cmd {
            "uci" => {
                writeln!(out, "id name MaterialChess 0.1")?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(
                    out,
                    "option name Strategy type combo default minimax {}",
                    STRATEGIES.map(|s| format!("var {}", s)).join(" ")
                )?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {}",
                    DEFAULT_DEPTH, MAX_DEPTH
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => self.set_option(args),
            "ucinewgame" => {
                self.pos = Position::startpos();
                self.engine.new_game();
            }
            "position" => {
                if let Err(e) = set_position_from_uci(&mut self.pos, args) {
                    warn!(error = %e, "rejected position command");
                }
            }
            "go" => {
                let reply = match self.best_move() {
                    Some(mv) => move_to_uci(mv),
                    None => "0000".to_string(),
                };
                writeln!(out, "bestmove {}", reply)?;
            }
            "d" => write!(out, "{}", self.pos.board)?,
            "quit" => return Ok(false),
            _ => debug!(cmd, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(true)
    }

    /// `setoption name <Name> value <Value>`
    fn set_option(&mut self, args: &[&str]) {
        let name_at = args.iter().position(|&a| a == "name");
        let value_at = args.iter().position(|&a| a == "value");
        let (Some(n), Some(v)) = (name_at, value_at) else {
            warn!(?args, "malformed setoption");
            return;
        };
        let name = args.get(n + 1..v).map(|s| s.join(" ")).unwrap_or_default();
        let value = args.get(v + 1..).map(|s| s.join(" ")).unwrap_or_default();

        if name.eq_ignore_ascii_case("strategy") {
            match STRATEGIES.iter().find(|s| s.eq_ignore_ascii_case(&value)) {
                Some(&strategy) => {
                    self.strategy = strategy;
                    self.rebuild_engine();
                }
                None => warn!(%value, "unknown strategy"),
            }
        } else if name.eq_ignore_ascii_case("depth") {
            match value.parse::<u8>() {
                Ok(d) if (1..=MAX_DEPTH).contains(&d) => {
                    self.depth = d;
                    self.engine.set_option("Depth", &value);
                }
                _ => warn!(%value, "depth out of range"),
            }
        } else if !self.engine.set_option(&name, &value) {
            debug!(%name, "ignoring unsupported option");
        }
    }

    /// The configured strategy's choice, or a random legal move when it has
    /// none. `None` only when the game is already over.
    fn best_move(&mut self) -> Option<chess_core::Move> {
        let legal = self.pos.legal_moves();
        if legal.status.is_terminal() {
            return None;
        }
        match self.engine.select_move(&mut self.pos, &legal.moves) {
            Some(mv) => Some(mv),
            None => {
                warn!(strategy = self.strategy, "no move selected, playing a random one");
                Some(self.fallback.pick(&legal.moves))
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
