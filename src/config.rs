//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use flawless_tictactoe::FirstMover;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "flawless.toml";

/// Who opens each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
pub enum Seating {
    /// The computer opens and plays X.
    #[display("engine")]
    Engine,
    /// You open and play X.
    #[display("opponent")]
    Opponent,
    /// Toss a coin before every game.
    #[display("random")]
    Random,
}

impl Seating {
    /// Settles the seating for one game.
    #[instrument]
    pub fn resolve(self) -> FirstMover {
        match self {
            Seating::Engine => FirstMover::Engine,
            Seating::Opponent => FirstMover::Opponent,
            Seating::Random => {
                if rand::random_bool(0.5) {
                    FirstMover::Engine
                } else {
                    FirstMover::Opponent
                }
            }
        }
    }
}

/// Settings for interactive play.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayConfig {
    /// Who opens each game.
    #[serde(default = "default_first")]
    first: Seating,

    /// Highlight the last moves with terminal colours.
    #[serde(default = "default_color")]
    color: bool,
}

#[instrument]
fn default_first() -> Seating {
    Seating::Random
}

#[instrument]
fn default_color() -> bool {
    true
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            first: default_first(),
            color: default_color(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first = %config.first, color = config.color, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given; otherwise [`DEFAULT_CONFIG_FILE`] when it
    /// exists, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, first: Option<Seating>, no_color: bool) -> Self {
        if let Some(first) = first {
            self.first = first;
        }
        if no_color {
            self.color = false;
        }
        self
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
