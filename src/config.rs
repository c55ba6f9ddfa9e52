//! Terminal front end configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::SortOrder;

/// Settings for the terminal game, usually read from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Order of the move list at startup.
    #[serde(default)]
    initial_sort: SortOrder,

    /// File receiving trace output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Background color of the winning cells, as a ratatui color name.
    #[serde(default = "default_highlight")]
    highlight: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_history.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_highlight() -> String {
    "yellow".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            initial_sort: SortOrder::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            highlight: default_highlight(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.highlight_color()?;
        info!(sort = %config.initial_sort, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses the highlight color name.
    pub fn highlight_color(&self) -> Result<Color, ConfigError> {
        Color::from_str(&self.highlight)
            .map_err(|_| ConfigError::new(format!("Unknown highlight color: {}", self.highlight)))
    }

    /// Overrides the initial list order.
    pub fn set_initial_sort(&mut self, sort: SortOrder) {
        self.initial_sort = sort;
    }

    /// Overrides the log file location.
    pub fn set_log_file(&mut self, path: PathBuf) {
        self.log_file = path;
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
