use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use super::Strategy;
use crate::state::GameState;
use crate::types::Symbol;

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a strategy seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform pick from `candidates`.
    pub(crate) fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.random_range(0..candidates.len())])
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    #[instrument(skip(self, state))]
    fn choose_move(
        &mut self,
        state: &GameState,
        _acting: Symbol,
        _opponent: Symbol,
    ) -> Option<usize> {
        let choice = self.pick(&state.board().empty_indices());
        debug!(?choice, "Random pick");
        choice
    }

    fn name(&self) -> &str {
        "Random"
    }
}
