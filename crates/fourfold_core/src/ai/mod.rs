//! Computer opponents.
//!
//! Every opponent implements [`Strategy`]. Trial placements are made on a
//! scratch copy of the board, so the game state handed in is never mutated.

mod difficulty;
mod heuristic;
mod minimax;
mod random;

pub use difficulty::Difficulty;
pub use heuristic::HeuristicStrategy;
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use std::fmt::Debug;

use crate::state::GameState;
use crate::types::Symbol;

/// Move selection policy for an AI seat.
pub trait Strategy: Debug {
    /// Picks an empty square for `acting` to play against `opponent`.
    ///
    /// Returns `None` only when the board has no empty square.
    fn choose_move(&mut self, state: &GameState, acting: Symbol, opponent: Symbol)
    -> Option<usize>;

    /// Returns the strategy's display name.
    fn name(&self) -> &str;
}
