//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup. A missing or unreadable file
//! gives defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vocab_core::DEFAULT_FILE_NAME;

use crate::error::GuiError;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "VocabularyStudio";
const APPLICATION: &str = "VocabularyStudio";

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the vocabulary lives.
    pub storage: StorageSettings,

    /// Display settings.
    pub display: DisplaySettings,

    /// Log output.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save settings to the default path.
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GuiError::settings_save(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| GuiError::settings_save(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| GuiError::settings_save(format!("Failed to write settings: {}", e)))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Vocabulary file to open: the configured override, or the default
    /// location in the user's data directory.
    pub fn data_file(&self) -> PathBuf {
        self.storage
            .data_file
            .clone()
            .unwrap_or_else(default_data_file)
    }
}

fn default_data_file() -> PathBuf {
    directories::ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.data_dir().join(DEFAULT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Storage settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Override for the vocabulary file path.
    pub data_file: Option<PathBuf>,
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Include the example sentence when a list item is revealed.
    pub show_examples_in_list: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_examples_in_list: true,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
