//! Batch play: the computer (O) against a random player (X).

use std::fmt;

use anyhow::{Context, Result, bail};
use derive_getters::Getters;
use fourfold_core::{
    Difficulty, GameConfig, GameController, GameStatus, RandomStrategy, Scores, Strategy, Symbol,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Outcome of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Tally {
    games: u32,
    scores: Scores,
    draws: u32,
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} games: ", self.games)?;
        for (symbol, wins) in self.scores.iter() {
            write!(f, "{symbol} {wins}, ")?;
        }
        write!(f, "draws {}", self.draws)
    }
}

/// Plays `games` games and returns the final tally.
///
/// Hard is refused: an exhaustive search from an empty board does not finish.
#[instrument]
pub fn simulate(difficulty: Difficulty, games: u32, seed: Option<u64>) -> Result<Tally> {
    if difficulty == Difficulty::Hard {
        bail!("Simulation supports easy and medium only; hard searches the whole game tree");
    }

    let config = GameConfig::solo(difficulty);
    let (mut controller, mut opponent) = match seed {
        Some(seed) => (
            GameController::start_seeded(config, seed)?,
            RandomStrategy::seeded(seed.wrapping_add(1)),
        ),
        None => (GameController::start(config)?, RandomStrategy::new()),
    };

    let mut draws = 0;
    for game in 0..games {
        if game > 0 {
            controller.restart();
        }
        while !controller.state().is_terminal() {
            if controller.is_ai_turn() {
                controller.play_ai_turn()?;
            } else {
                let index = opponent
                    .choose_move(controller.state(), Symbol::X, Symbol::O)
                    .context("No legal move on a live board")?;
                controller.apply_move(index)?;
            }
        }
        debug!(game, status = ?controller.status(), "Game finished");
        if controller.status() == GameStatus::Draw {
            draws += 1;
        }
    }

    let tally = Tally {
        games,
        scores: controller.scores().clone(),
        draws,
    };
    info!(%tally, "Simulation complete");
    Ok(tally)
}
