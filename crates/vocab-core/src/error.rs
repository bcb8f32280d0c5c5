//! Error types for store, quiz and editor operations.
//!
//! Apart from [`StoreError::Persistence`], every condition here is recovered
//! locally by the caller and shown to the user as a notice.

use thiserror::Error;
use vocab_model::ValidationError;
use vocab_persistence::PersistenceError;

/// Entry store error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The word is not a current key.
    #[error("word not found: {word}")]
    NotFound { word: String },

    /// Reading or writing durable storage failed.
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { word } => {
                format!("The selected word \"{word}\" does not exist.")
            }
            Self::Persistence(err) => err.user_message(),
        }
    }

    /// Whether this is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Quiz session error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    /// A quiz was requested over an empty collection.
    #[error("the collection has no entries")]
    EmptyCollection,

    /// Every question of the session has been asked.
    #[error("no more questions")]
    Finished,
}

impl QuizError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyCollection => "There are no words yet. Add a word to start a quiz.",
            Self::Finished => "All words have been asked.",
        }
    }
}

/// Entry editor error.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Add form input was rejected; the store was not touched.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Delete was confirmed without a selected word.
    #[error("no word selected")]
    NothingSelected,

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditorError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.user_message(),
            Self::NothingSelected => "Select the word to delete.".to_string(),
            Self::Store(err) => err.user_message(),
        }
    }
}
