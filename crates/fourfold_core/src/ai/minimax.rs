use tracing::{debug, instrument, trace};

use super::Strategy;
use crate::board::Board;
use crate::rules;
use crate::state::GameState;
use crate::types::Symbol;

/// Base magnitude of a decided position; depth is subtracted from it.
const WIN_SCORE: i32 = 10;

/// Exhaustive minimax to the end of the game.
///
/// No depth limit and no pruning, so the cost grows factorially with the
/// number of empty squares. Ties at the root go to the lowest index, which
/// makes the choice deterministic for a given board.
#[derive(Debug, Clone, Default)]
pub struct MinimaxStrategy {
    nodes: u64,
}

impl MinimaxStrategy {
    /// Creates a minimax player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores `board` after a move, from `acting`'s point of view.
    ///
    /// `maximizing` is true when `acting` is the side to play.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: i32,
        maximizing: bool,
        acting: Symbol,
        opponent: Symbol,
    ) -> i32 {
        self.nodes += 1;

        if rules::has_won(board, acting) {
            return WIN_SCORE - depth;
        }
        if rules::has_won(board, opponent) {
            return depth - WIN_SCORE;
        }
        if rules::is_full(board) {
            return 0;
        }

        let (mover, mut best) = if maximizing {
            (acting, i32::MIN)
        } else {
            (opponent, i32::MAX)
        };

        for idx in board.empty_indices() {
            board.set(idx, mover);
            let score = self.minimax(board, depth + 1, !maximizing, acting, opponent);
            board.clear(idx);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, state), fields(empty = state.board().empty_indices().len()))]
    fn choose_move(
        &mut self,
        state: &GameState,
        acting: Symbol,
        opponent: Symbol,
    ) -> Option<usize> {
        self.nodes = 0;
        let mut scratch = state.board().clone();
        let mut best: Option<(usize, i32)> = None;

        for idx in scratch.empty_indices() {
            scratch.set(idx, acting);
            let score = self.minimax(&mut scratch, 0, false, acting, opponent);
            scratch.clear(idx);
            trace!(index = idx, score, "Scored candidate");

            if best.is_none_or(|(_, top)| score > top) {
                best = Some((idx, score));
            }
        }

        debug!(choice = ?best, nodes = self.nodes, "Minimax search finished");
        best.map(|(idx, _)| idx)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_SIZE, Roster};

    /// Full striped board (`XXOOXX` / `OOXXOO` row pairs) with `holes` emptied.
    fn striped_with_holes(holes: &[usize]) -> Board {
        let mut board = Board::new(GRID_SIZE);
        let pattern = [Symbol::X, Symbol::X, Symbol::O, Symbol::O, Symbol::X, Symbol::X];
        for idx in 0..board.len() {
            let symbol = pattern[board.col_of(idx)];
            let symbol = match (board.row_of(idx) % 2, symbol) {
                (0, s) => s,
                (_, Symbol::X) => Symbol::O,
                (_, _) => Symbol::X,
            };
            board.set(idx, symbol);
        }
        for &idx in holes {
            board.clear(idx);
        }
        board
    }

    fn state_for(board: Board) -> GameState {
        GameState::from_position(Roster::from_palette(2).unwrap(), board, 1)
    }

    #[test]
    fn test_full_board_has_no_move() {
        let state = state_for(striped_with_holes(&[]));
        let mut ai = MinimaxStrategy::new();
        assert_eq!(ai.choose_move(&state, Symbol::O, Symbol::X), None);
    }

    #[test]
    fn test_takes_immediate_win() {
        // Rows 0-4 striped, row 5 is O O O _ _ _.
        let mut board = striped_with_holes(&[33, 34, 35]);
        board.set(32, Symbol::O);
        let state = state_for(board);
        let mut ai = MinimaxStrategy::new();
        assert_eq!(ai.choose_move(&state, Symbol::O, Symbol::X), Some(33));
    }

    #[test]
    fn test_blocks_threat() {
        // Row 1 becomes O O X X X _, so X wins at 11 unless O takes it.
        let mut board = striped_with_holes(&[0, 11]);
        board.set(10, Symbol::X);
        let state = state_for(board);
        let mut ai = MinimaxStrategy::new();
        assert_eq!(ai.choose_move(&state, Symbol::O, Symbol::X), Some(11));
    }

    #[test]
    fn test_leaves_board_untouched() {
        let state = state_for(striped_with_holes(&[4, 9, 17, 30, 35]));
        let before = state.clone();
        let mut ai = MinimaxStrategy::new();
        ai.choose_move(&state, Symbol::O, Symbol::X);
        assert_eq!(state, before);
        assert!(ai.nodes() > 0);
    }

    #[test]
    fn test_deterministic() {
        let state = state_for(striped_with_holes(&[4, 9, 17, 30, 35]));
        let first = MinimaxStrategy::new().choose_move(&state, Symbol::O, Symbol::X);
        for _ in 0..3 {
            assert_eq!(
                MinimaxStrategy::new().choose_move(&state, Symbol::O, Symbol::X),
                first
            );
        }
    }
}
