//! Match runner for playing games between engines

use chess_core::{Color, Engine, GameStatus, Position};
use random_engine::RandomEngine;
use tracing::{info, warn};

use crate::config::MatchConfig;
use crate::results::{GameRecord, GameResult, MatchResult, Termination};

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
    /// Plays for any engine that comes back without a usable move.
    fallback: RandomEngine,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        let fallback = match config.seed {
            Some(seed) => RandomEngine::with_seed(seed),
            None => RandomEngine::new(),
        };
        Self { config, fallback }
    }

    /// Run a match between two engines
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&mut self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let label1 = engine1.name().to_string();
        let label2 = engine2.name().to_string();
        self.run_labeled_match(&label1, engine1, &label2, engine2)
    }

    /// Like [`MatchRunner::run_match`], recording the engines under the given
    /// labels instead of their names.
    pub fn run_labeled_match(
        &mut self,
        label1: &str,
        engine1: &mut dyn Engine,
        label2: &str,
        engine2: &mut dyn Engine,
    ) -> MatchResult {
        let mut result = MatchResult::new(label1, label2);

        for game_num in 0..self.config.games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (mut game, engine1_result) = if engine1_white {
                let game = self.play_game(engine1, engine2);
                let r = game.result;
                (game, r)
            } else {
                let game = self.play_game(engine2, engine1);
                let r = game.result.flipped();
                (game, r)
            };
            let (white, black) = if engine1_white {
                (label1, label2)
            } else {
                (label2, label1)
            };
            game.white = white.to_string();
            game.black = black.to_string();

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                println!(
                    "Game {}/{}: {} ({}) {:?} after {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.games,
                    game.result.notation(),
                    color,
                    game.termination,
                    game.plies(),
                    result.wins + u32::from(engine1_result == GameResult::Win),
                    result.losses + u32::from(engine1_result == GameResult::Loss),
                    result.draws + u32::from(engine1_result == GameResult::Draw),
                );
            }

            result.record(engine1_result, game);
        }

        result
    }

    /// Play a single game from the initial position
    pub fn play_game(&mut self, white: &mut dyn Engine, black: &mut dyn Engine) -> GameRecord {
        self.play_from(Position::startpos(), white, black)
    }

    /// Play a single game from `start`. The result is from White's perspective.
    pub fn play_from(
        &mut self,
        start: Position,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> GameRecord {
        let mut pos = start;
        let mut moves = Vec::new();
        let mut fallbacks = 0;
        white.new_game();
        black.new_game();

        let (result, termination) = loop {
            let legal = pos.legal_moves();
            match legal.status {
                GameStatus::Checkmate => {
                    let result = match pos.side_to_move {
                        Color::White => GameResult::Loss,
                        Color::Black => GameResult::Win,
                    };
                    break (result, Termination::Checkmate);
                }
                GameStatus::Stalemate => break (GameResult::Draw, Termination::Stalemate),
                GameStatus::Ongoing => {}
            }
            if pos.is_fifty_move_draw() {
                break (GameResult::Draw, Termination::FiftyMoveRule);
            }
            if moves.len() >= self.config.max_moves as usize {
                break (GameResult::Draw, Termination::MoveLimit);
            }

            let engine: &mut dyn Engine = match pos.side_to_move {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            let mv = match engine.select_move(&mut pos, &legal.moves) {
                Some(mv) if legal.moves.contains(&mv) => mv,
                Some(mv) => {
                    warn!(
                        engine = engine.name(),
                        %mv,
                        "engine chose an illegal move, playing a random one"
                    );
                    fallbacks += 1;
                    self.fallback.pick(&legal.moves)
                }
                None => {
                    warn!(engine = engine.name(), "engine found no move, playing a random one");
                    fallbacks += 1;
                    self.fallback.pick(&legal.moves)
                }
            };

            pos.make_move(mv);
            moves.push(mv.to_string());
        };

        info!(
            white = white.name(),
            black = black.name(),
            result = result.notation(),
            ?termination,
            plies = moves.len(),
            fallbacks,
            "game finished"
        );

        GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            result,
            termination,
            moves,
            fallbacks,
            final_fen: pos.to_fen(),
        }
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
