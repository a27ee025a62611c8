use tracing::{debug, instrument};

use super::Strategy;
use super::random::RandomStrategy;
use crate::board::Board;
use crate::rules;
use crate::state::GameState;
use crate::types::Symbol;

/// Takes an immediate win, else blocks the opponent's immediate win, else
/// plays at random.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy {
    fallback: RandomStrategy,
}

impl HeuristicStrategy {
    /// Creates a heuristic player with an OS-seeded fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a heuristic player whose random fallback is reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            fallback: RandomStrategy::seeded(seed),
        }
    }
}

/// First candidate (in order) that completes a win for `symbol`.
///
/// Each trial placement is undone before the next one.
fn completing_move(board: &mut Board, candidates: &[usize], symbol: Symbol) -> Option<usize> {
    candidates.iter().copied().find(|&idx| {
        board.set(idx, symbol);
        let wins = rules::has_won(board, symbol);
        board.clear(idx);
        wins
    })
}

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, state))]
    fn choose_move(
        &mut self,
        state: &GameState,
        acting: Symbol,
        opponent: Symbol,
    ) -> Option<usize> {
        let mut scratch = state.board().clone();
        let empty = scratch.empty_indices();

        if let Some(idx) = completing_move(&mut scratch, &empty, acting) {
            debug!(index = idx, "Taking winning square");
            return Some(idx);
        }

        if let Some(idx) = completing_move(&mut scratch, &empty, opponent) {
            debug!(index = idx, "Blocking opponent");
            return Some(idx);
        }

        self.fallback.pick(&empty)
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_SIZE, Roster};

    fn position(x: &[usize], o: &[usize]) -> GameState {
        let mut board = Board::new(GRID_SIZE);
        x.iter().for_each(|&idx| board.set(idx, Symbol::X));
        o.iter().for_each(|&idx| board.set(idx, Symbol::O));
        GameState::from_position(Roster::from_palette(2).unwrap(), board, 1)
    }

    #[test]
    fn test_takes_winning_move() {
        // O threatens 3 on row 0; X threatens 33 on row 5.
        let state = position(&[30, 31, 32], &[0, 1, 2]);
        let mut ai = HeuristicStrategy::seeded(1);
        assert_eq!(ai.choose_move(&state, Symbol::O, Symbol::X), Some(3));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // The block at 27 comes before O's own win at 33 in scan order.
        let state = position(&[24, 25, 26], &[30, 31, 32]);
        let mut ai = HeuristicStrategy::seeded(1);
        assert_eq!(ai.choose_move(&state, Symbol::O, Symbol::X), Some(33));
    }

    #[test]
    fn test_blocks_opponent() {
        let state = position(&[12, 18, 24], &[5, 35]);
        let mut ai = HeuristicStrategy::seeded(1);
        // X threatens to complete the column at 6 (above) or 30 (below).
        assert_eq!(ai.choose_move(&state, Symbol::O, Symbol::X), Some(6));
    }

    #[test]
    fn test_blocks_square() {
        let state = position(&[14, 15, 20], &[0, 35]);
        let mut ai = HeuristicStrategy::seeded(1);
        assert_eq!(ai.choose_move(&state, Symbol::O, Symbol::X), Some(21));
    }

    #[test]
    fn test_leaves_board_untouched() {
        let state = position(&[12, 18, 24], &[5, 35]);
        let before = state.clone();
        let mut ai = HeuristicStrategy::seeded(1);
        ai.choose_move(&state, Symbol::O, Symbol::X);
        assert_eq!(state, before);
    }

    #[test]
    fn test_falls_back_to_empty_square() {
        let state = position(&[0], &[35]);
        let mut ai = HeuristicStrategy::seeded(3);
        let choice = ai.choose_move(&state, Symbol::O, Symbol::X).unwrap();
        assert!(state.board().is_vacant(choice));
    }
}
