//! Settings for the console front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_checkers::RuleSet;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "checkers.toml";

/// Everything the console reads from its settings file.
///
/// Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Rule options passed to the game.
    rules: RuleSet,

    /// Terminal output options.
    display: DisplaySettings,
}

/// Terminal output options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Colour pieces and messages with ANSI escapes.
    color: bool,

    /// Clear the terminal between screens.
    clear_screen: bool,
}

impl DisplaySettings {
    /// Creates display settings.
    pub fn new(color: bool, clear_screen: bool) -> Self {
        Self {
            color,
            clear_screen,
        }
    }

    /// Plain output: no colour, no clearing. Suits pipes and logs.
    pub fn plain() -> Self {
        Self::new(false, false)
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Settings {
    /// Creates settings from parts.
    pub fn new(rules: RuleSet, display: DisplaySettings) -> Self {
        Self { rules, display }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(rules = ?settings.rules, "Settings loaded successfully");
        Ok(settings)
    }

    /// Loads settings from `path` if given, else from [`DEFAULT_SETTINGS_FILE`]
    /// when it exists, else falls back to defaults.
    ///
    /// An explicit path that cannot be read is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
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
