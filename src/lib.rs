//! Crazy Colors - a Stroop-effect color quiz for the terminal
//!
//! The player is shown a color word painted in a mismatching ink on a
//! mismatching background and has to name the requested attribute (the
//! ink or the background) under a running session clock.

use std::fmt;

// Public re-exports
pub mod app;
pub mod config;
pub mod game;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum CrazyColorsError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// Session history persistence error
    PersistenceError(String),
}

impl fmt::Display for CrazyColorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrazyColorsError::IoError(err) => write!(f, "I/O error: {}", err),
            CrazyColorsError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CrazyColorsError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            CrazyColorsError::PersistenceError(msg) => {
                write!(f, "Session persistence error: {}", msg)
            }
        }
    }
}

impl std::error::Error for CrazyColorsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrazyColorsError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CrazyColorsError {
    fn from(err: std::io::Error) -> Self {
        CrazyColorsError::IoError(err)
    }
}

impl From<serde_json::Error> for CrazyColorsError {
    fn from(err: serde_json::Error) -> Self {
        CrazyColorsError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for CrazyColorsError {
    fn from(err: toml::de::Error) -> Self {
        CrazyColorsError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for CrazyColorsError {
    fn from(err: toml::ser::Error) -> Self {
        CrazyColorsError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for Crazy Colors operations
pub type Result<T> = std::result::Result<T, CrazyColorsError>;

/// Error handling utilities
pub mod error {
    use super::CrazyColorsError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &CrazyColorsError) -> String {
        match error {
            CrazyColorsError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings file.", msg)
            }
            CrazyColorsError::PersistenceError(_) => {
                "Failed to save session history. Check disk space and permissions.".to_string()
            }
            CrazyColorsError::TuiError(_) => {
                "Terminal error. Make sure you are running in an interactive terminal.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "crazycolors";
pub const CONFIG_FILE: &str = "crazycolors.toml";
pub const SESSIONS_FILE: &str = "sessions.json";
pub const MAX_SESSIONS_HISTORY: usize = 100;
