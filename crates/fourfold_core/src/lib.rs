//! Fourfold core - pure game logic for a four-in-a-row grid game.
//!
//! Players take turns placing their symbol on a 6×6 grid. A player wins with
//! four in a row (horizontal, vertical or either diagonal) or by filling a
//! 2×2 square. Two to four people can share the board, or one person can play
//! against the computer at three difficulty tiers.
//!
//! # Architecture
//!
//! - **Board**: row-major grid storage and index helpers
//! - **Rules**: win and draw detection
//! - **GameState**: turn order, move application, scores
//! - **AI**: random, heuristic and exhaustive minimax strategies
//! - **GameController**: session driver emitting [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use fourfold_core::{Difficulty, GameConfig, GameController, GameStatus};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = GameController::start(GameConfig::solo(Difficulty::Medium))?;
//! controller.apply_move(14)?;
//! if controller.is_ai_turn() {
//!     controller.play_ai_turn()?;
//! }
//! assert_eq!(controller.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
mod error;
mod events;
mod state;
mod types;

pub mod ai;
pub mod rules;

pub use action::{MoveError, MoveOutcome};
pub use ai::{Difficulty, HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy};
pub use board::Board;
pub use controller::{GameConfig, GameController, MoveReport};
pub use error::ConfigError;
pub use events::{GameEvent, GameObserver};
pub use rules::{Direction, WinKind, WinningLine};
pub use state::GameState;
pub use types::{
    GRID_SIZE, GameStatus, MAX_PLAYERS, MIN_PLAYERS, Player, Roster, Scores, Square, Symbol,
};
