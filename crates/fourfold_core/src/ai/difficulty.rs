use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use tracing::instrument;

use super::{HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy};
use crate::error::ConfigError;

/// AI difficulty tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random moves.
    #[default]
    Easy,
    /// Win if possible, else block, else random.
    Medium,
    /// Exhaustive minimax.
    Hard,
}

impl Difficulty {
    /// Parses a lowercase token such as `"medium"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownDifficulty`] for anything else.
    #[instrument]
    pub fn parse_token(token: &str) -> Result<Self, ConfigError> {
        token
            .parse()
            .map_err(|_| ConfigError::UnknownDifficulty(token.to_string()))
    }

    /// Builds the strategy for this tier.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new()),
            Difficulty::Medium => Box::new(HeuristicStrategy::new()),
            Difficulty::Hard => Box::new(MinimaxStrategy::new()),
        }
    }

    /// Builds the strategy with any randomness seeded from `seed`.
    pub fn seeded_strategy(self, seed: u64) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::seeded(seed)),
            Difficulty::Medium => Box::new(HeuristicStrategy::seeded(seed)),
            Difficulty::Hard => Box::new(MinimaxStrategy::new()),
        }
    }
}
