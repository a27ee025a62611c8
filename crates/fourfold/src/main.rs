//! Fourfold - terminal front end
//!
//! Interactive play against friends or the computer, plus batch simulation
//! of the computer opponents.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod settings;
mod simulate;
mod terminal;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use fourfold_core::Difficulty;
use settings::{EventFormat, Settings};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            players,
            difficulty,
            local,
            config,
            events,
        } => run_play(players, difficulty, local, config, events),
        Command::Simulate {
            difficulty,
            games,
            seed,
        } => run_simulate(&difficulty, games, seed),
    }
}

/// Merges flags over the settings file and starts an interactive game.
#[instrument]
fn run_play(
    players: Option<usize>,
    difficulty: Option<String>,
    local: bool,
    config: Option<PathBuf>,
    events: Option<EventFormat>,
) -> Result<()> {
    let mut settings = Settings::load(config.as_deref())?;
    if let Some(players) = players {
        settings = settings.with_players(players);
    }
    if difficulty.is_some() {
        settings = settings.with_difficulty(difficulty);
    }
    if local {
        settings = settings.with_difficulty(None);
    }
    if let Some(events) = events {
        settings = settings.with_events(events);
    }

    info!(?settings, "Starting game");
    terminal::play(&settings)
}

/// Runs a batch and prints the tally.
#[instrument]
fn run_simulate(difficulty: &str, games: u32, seed: Option<u64>) -> Result<()> {
    let difficulty = Difficulty::parse_token(difficulty)?;
    let tally = simulate::simulate(difficulty, games, seed)?;
    println!("{tally}");
    Ok(())
}
