//! Player settings loaded from `fourfold.toml`.

use std::path::Path;

use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use fourfold_core::{ConfigError, GameConfig, MIN_PLAYERS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_SETTINGS_FILE: &str = "fourfold.toml";

/// How the terminal reports game events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventFormat {
    /// Human-readable messages.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Session preferences. Command-line flags override file values.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Number of seats.
    players: usize,
    /// Computer tier for the last seat, or `None` for a local game.
    difficulty: Option<String>,
    /// Pause before the computer moves, in milliseconds.
    ai_delay_ms: u64,
    /// Event reporting format.
    events: EventFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            players: MIN_PLAYERS,
            difficulty: Some("easy".to_string()),
            ai_delay_ms: 500,
            events: EventFormat::Text,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            players = settings.players,
            difficulty = ?settings.difficulty,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Loads `path` if given, else [`DEFAULT_SETTINGS_FILE`] if it exists,
    /// else the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).exists() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validated game configuration for these settings.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::parse(self.players, self.difficulty.as_deref())
    }
}

/// Settings file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
