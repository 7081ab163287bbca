//! Game configuration loaded from TOML.

use std::path::Path;
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tictactoe_agent::{DEFAULT_DEPTH, FirstPlayer, Mark, SessionSettings};
use tracing::{debug, info, instrument};

/// Settings for interactive play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Who opens each game.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Agent lookahead in plies.
    #[serde(default = "default_depth")]
    depth: u32,

    /// Print the agent's utility next to each of its moves.
    #[serde(default)]
    show_utility: bool,
}

fn default_depth() -> u32 {
    DEFAULT_DEPTH
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            depth: default_depth(),
            show_utility: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(first = %config.first_player, depth = config.depth, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, first: Option<FirstPlayer>, depth: Option<u32>) -> Self {
        if let Some(first) = first {
            self.first_player = first;
        }
        if let Some(depth) = depth {
            self.depth = depth;
        }
        self
    }

    /// Session settings derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings::new(self.first_player, self.depth)
    }
}

/// Side argument accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideArg(pub Mark);

impl FromStr for SideArg {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Mark::from_symbol(s.trim().chars().next().unwrap_or(' ')) {
            Some(mark) if !mark.is_empty() && s.trim().chars().count() == 1 => Ok(Self(mark)),
            _ => Err(ConfigError::new(format!("Expected x or o, got {:?}", s))),
        }
    }
}

/// Configuration error.
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
    /// Creates a new configuration error.
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
