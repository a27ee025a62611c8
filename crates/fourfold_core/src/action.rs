//! Move results and rejections.

use serde::Serialize;

use crate::rules::{RUN_LENGTH, WinningLine};
use crate::types::Symbol;

/// What a legal move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// Game continues with the next seat.
    Continue {
        /// Symbol now to move.
        next: Symbol,
    },
    /// The mover completed a winning pattern.
    Won {
        /// The mover.
        winner: Symbol,
        /// Cells to highlight.
        line: WinningLine,
    },
    /// The move filled the board without a winner.
    Draw,
}

impl MoveOutcome {
    /// True if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }

    /// Winning cells, when the move won.
    pub fn winning_cells(&self) -> Option<[usize; RUN_LENGTH]> {
        match self {
            MoveOutcome::Won { line, .. } => Some(*line.cells()),
            _ => None,
        }
    }
}

/// A move was rejected. The game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The target square already holds a symbol.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),

    /// The index is past the end of the board.
    #[display("Square {} is off the board", _0)]
    OutOfBounds(usize),

    /// The game already ended in a win or draw.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
