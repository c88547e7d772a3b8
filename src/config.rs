//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::{DEFAULT_DEPTH, SessionConfig};
use tracing::{debug, info, instrument};

/// Smallest cell that still fits its border and a mark.
pub const MIN_CELL_WIDTH: u16 = 5;
/// Smallest cell height that still fits its border and a mark.
pub const MIN_CELL_HEIGHT: u16 = 3;
/// Widest cell accepted; three of them must fit a terminal row.
pub const MAX_CELL_WIDTH: u16 = 64;
/// Tallest cell accepted.
pub const MAX_CELL_HEIGHT: u16 = 32;

/// Settings for a game of tic-tac-toe in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Whether one side is played by the computer.
    #[serde(default = "default_vs_computer")]
    vs_computer: bool,

    /// Whether the computer plays X and opens.
    #[serde(default)]
    computer_moves_first: bool,

    /// Ply limit for the computer's search.
    #[serde(default = "default_search_depth")]
    search_depth: u32,

    /// Terminal columns per board cell.
    #[serde(default = "default_cell_width")]
    cell_width: u16,

    /// Terminal rows per board cell.
    #[serde(default = "default_cell_height")]
    cell_height: u16,

    /// File that receives log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_vs_computer() -> bool {
    true
}

fn default_search_depth() -> u32 {
    DEFAULT_DEPTH
}

fn default_cell_width() -> u16 {
    9
}

fn default_cell_height() -> u16 {
    5
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_minimax.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vs_computer: default_vs_computer(),
            computer_moves_first: false,
            search_depth: default_search_depth(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            log_file: default_log_file(),
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Two humans share the keyboard.
    pub vs_human: bool,
    /// The computer opens as X.
    pub computer_first: bool,
    /// Search depth.
    pub depth: Option<u32>,
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

        info!(depth = config.search_depth, vs_computer = config.vs_computer, "Config loaded");
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
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.vs_human {
            self.vs_computer = false;
        }
        if overrides.computer_first {
            self.computer_moves_first = true;
        }
        if let Some(depth) = overrides.depth {
            self.search_depth = depth;
        }
        self
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Fails for a zero search depth or a cell size outside the drawable
    /// range.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::new("search_depth must be at least 1".to_string()));
        }
        if !(MIN_CELL_WIDTH..=MAX_CELL_WIDTH).contains(&self.cell_width) {
            return Err(ConfigError::new(format!(
                "cell_width must be between {} and {}, got {}",
                MIN_CELL_WIDTH, MAX_CELL_WIDTH, self.cell_width
            )));
        }
        if !(MIN_CELL_HEIGHT..=MAX_CELL_HEIGHT).contains(&self.cell_height) {
            return Err(ConfigError::new(format!(
                "cell_height must be between {} and {}, got {}",
                MIN_CELL_HEIGHT, MAX_CELL_HEIGHT, self.cell_height
            )));
        }
        Ok(())
    }

    /// Session settings derived from this configuration.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            vs_computer: self.vs_computer,
            computer_moves_first: self.computer_moves_first,
            depth: self.search_depth,
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
    /// Creates a new configuration error at the caller's location.
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
