//! Configuration errors raised when a game is set up.

use derive_more::Display;

/// A game could not be started with the requested configuration.
///
/// No game state is created when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigError {
    /// Player count outside the supported 2–4 range.
    #[display("Player count must be between 2 and 4, got {}", _0)]
    PlayerCount(usize),

    /// Difficulty token that is not `easy`, `medium` or `hard`.
    #[display("Unknown difficulty '{}' (expected easy, medium or hard)", _0)]
    UnknownDifficulty(String),
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::PlayerCount(7).to_string(),
            "Player count must be between 2 and 4, got 7"
        );
        assert_eq!(
            ConfigError::UnknownDifficulty("brutal".into()).to_string(),
            "Unknown difficulty 'brutal' (expected easy, medium or hard)"
        );
    }
}
