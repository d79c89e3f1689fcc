//! Configuration management module
//!
//! Handles loading and saving of the player's quiz preferences, plus
//! persistence of finished session records.

use std::fs;
use std::path::PathBuf;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::question::Attribute;
use crate::{CrazyColorsError, Result, APP_NAME, CONFIG_FILE};

pub mod persistence;

/// How the graded attribute is chosen across questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// Every question asks about the attribute from the settings
    Fixed,
    /// Every question flips a coin between ink and background
    RandomPerAnswer,
}

impl QuizMode {
    /// Get a human-readable description of the mode
    pub fn description(&self) -> &'static str {
        match self {
            QuizMode::Fixed => "Fixed",
            QuizMode::RandomPerAnswer => "Random per answer",
        }
    }

    /// The other mode
    pub fn toggled(&self) -> QuizMode {
        match self {
            QuizMode::Fixed => QuizMode::RandomPerAnswer,
            QuizMode::RandomPerAnswer => QuizMode::Fixed,
        }
    }
}

/// Player preferences, persisted between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Attribute selection mode
    pub mode: QuizMode,
    /// Attribute used while the mode is [`QuizMode::Fixed`]
    pub attribute: Attribute,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: QuizMode::Fixed,
            attribute: Attribute::Ink,
        }
    }
}

impl Settings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the attribute the next question will grade
    ///
    /// In fixed mode this is the configured attribute; in random mode
    /// a coin is flipped per question.
    pub fn resolve_attribute(&self, rng: &mut impl Rng) -> Attribute {
        match self.mode {
            QuizMode::Fixed => self.attribute,
            QuizMode::RandomPerAnswer => {
                if rng.gen_bool(0.5) {
                    Attribute::Ink
                } else {
                    Attribute::Background
                }
            }
        }
    }

    /// Load settings from the standard config file location
    /// Returns default settings if the file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            CrazyColorsError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            CrazyColorsError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(settings)
    }

    /// Save settings to the standard config file location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CrazyColorsError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CrazyColorsError::ConfigError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(&config_path, content).map_err(|e| {
            CrazyColorsError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/crazycolors/crazycolors.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            CrazyColorsError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_settings() {
        let settings = Settings::new();
        assert_eq!(settings.mode, QuizMode::Fixed);
        assert_eq!(settings.attribute, Attribute::Ink);
    }

    #[test]
    fn test_toml_serialization() {
        let settings = Settings {
            mode: QuizMode::RandomPerAnswer,
            attribute: Attribute::Background,
        };
        let toml_str = toml::to_string(&settings).expect("Failed to serialize to TOML");
        let deserialized: Settings =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");

        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_config_file_path() {
        let path = Settings::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("crazycolors"));
        assert!(path.to_string_lossy().contains("crazycolors.toml"));
    }

    #[test]
    fn test_fixed_mode_resolves_configured_attribute() {
        let mut rng = SmallRng::seed_from_u64(21);
        let settings = Settings {
            mode: QuizMode::Fixed,
            attribute: Attribute::Background,
        };
        for _ in 0..20 {
            assert_eq!(settings.resolve_attribute(&mut rng), Attribute::Background);
        }
    }

    #[test]
    fn test_random_mode_produces_both_attributes() {
        let mut rng = SmallRng::seed_from_u64(22);
        let settings = Settings {
            mode: QuizMode::RandomPerAnswer,
            attribute: Attribute::Ink,
        };
        let mut saw_ink = false;
        let mut saw_background = false;
        for _ in 0..200 {
            match settings.resolve_attribute(&mut rng) {
                Attribute::Ink => saw_ink = true,
                Attribute::Background => saw_background = true,
            }
        }
        assert!(saw_ink && saw_background);
    }

    #[test]
    fn test_mode_toggle_cycles() {
        assert_eq!(QuizMode::Fixed.toggled(), QuizMode::RandomPerAnswer);
        assert_eq!(QuizMode::RandomPerAnswer.toggled(), QuizMode::Fixed);
    }
}
