//! Command-line interface for fourfold.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::EventFormat;

/// Fourfold - four in a row or a 2×2 square on a 6×6 grid
#[derive(Parser, Debug)]
#[command(name = "fourfold")]
#[command(about = "Four-in-a-row grid game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Number of seats (2-4)
        #[arg(short, long)]
        players: Option<usize>,

        /// Computer opponent tier for the last seat (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Disable the computer opponent
        #[arg(long, conflicts_with = "difficulty")]
        local: bool,

        /// Settings file (defaults to ./fourfold.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// How game events are reported
        #[arg(long, value_enum)]
        events: Option<EventFormat>,
    },

    /// Pit the computer (O) against a random player (X) for a batch of games
    Simulate {
        /// Tier played by the computer (easy or medium)
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}
