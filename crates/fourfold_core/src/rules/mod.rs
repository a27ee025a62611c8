//! Game rules.
//!
//! Pure functions evaluating a board. Rules are separated from board
//! storage so the game state and the AI can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Direction, RUN_LENGTH, WinKind, WinningLine, has_won, locate_winning_cells};
