//! GUI-specific error types.
//!
//! Wraps core errors in a cloneable form so they can live in application
//! state and travel inside messages.

use thiserror::Error;
use vocab_core::StoreError;

/// GUI-specific errors.
///
/// # Display Behavior
///
/// - **Blocking**: [`GuiError::StoreLoad`] replaces the main window until quit
/// - **Transient**: everything else is shown as a toast
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    // =========================================================================
    // VOCABULARY FILE
    // =========================================================================
    /// The vocabulary file exists but could not be read.
    #[error("Failed to load vocabulary from {location}: {reason}")]
    StoreLoad {
        /// Where the store was loaded from.
        location: String,
        /// User-facing description of what went wrong.
        reason: String,
        /// Optional recovery hint.
        suggestion: Option<String>,
    },

    /// A change could not be written.
    #[error("Failed to save vocabulary: {reason}")]
    StoreSave {
        /// User-facing description of what went wrong.
        reason: String,
    },

    // =========================================================================
    // SETTINGS
    // =========================================================================
    /// Settings file could not be written.
    #[error("Failed to save settings: {reason}")]
    SettingsSave {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Build a blocking load error from a store failure.
    pub fn store_load(location: impl Into<String>, err: &StoreError) -> Self {
        let suggestion = match err {
            StoreError::Persistence(source) => source.suggestion(),
            StoreError::NotFound { .. } => None,
        };
        Self::StoreLoad {
            location: location.into(),
            reason: err.user_message(),
            suggestion,
        }
    }

    /// Build a transient save error from a store failure.
    pub fn store_save(err: &StoreError) -> Self {
        Self::StoreSave {
            reason: err.user_message(),
        }
    }

    pub fn settings_save(reason: impl Into<String>) -> Self {
        Self::SettingsSave {
            reason: reason.into(),
        }
    }

    /// Short heading for dialogs.
    pub fn title(&self) -> &'static str {
        match self {
            Self::StoreLoad { .. } => "Cannot open vocabulary",
            Self::StoreSave { .. } => "Changes not saved",
            Self::SettingsSave { .. } => "Settings not saved",
        }
    }

    /// Message for display to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::StoreLoad { reason, .. }
            | Self::StoreSave { reason }
            | Self::SettingsSave { reason } => reason.clone(),
        }
    }

    /// Recovery hint, if one applies.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            Self::StoreLoad { suggestion, .. } => suggestion.as_deref(),
            Self::StoreSave { .. } => {
                Some("Your last change was undone. Check disk space and permissions, then try again.")
            }
            Self::SettingsSave { .. } => None,
        }
    }

    /// Whether the application cannot continue.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::StoreLoad { .. })
    }
}
