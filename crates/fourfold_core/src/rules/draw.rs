//! Draw detection.

use tracing::instrument;

use super::win::has_won;
use crate::board::Board;
use crate::types::Symbol;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which none of `symbols` has won.
#[instrument(level = "trace", skip(board, symbols))]
pub fn is_draw(board: &Board, symbols: impl IntoIterator<Item = Symbol>) -> bool {
    is_full(board) && symbols.into_iter().all(|symbol| !has_won(board, symbol))
}
