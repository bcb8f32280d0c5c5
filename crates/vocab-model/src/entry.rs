//! Vocabulary entry types.

use serde::{Deserialize, Serialize};

/// Meaning and example sentence for a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryDetails {
    /// What the word means.
    pub meaning: String,

    /// A sentence using the word.
    pub example: String,
}

impl EntryDetails {
    /// Create new details.
    pub fn new(meaning: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            meaning: meaning.into(),
            example: example.into(),
        }
    }
}

/// A single vocabulary entry.
///
/// `word` is the unique key within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// The word being learned.
    pub word: String,

    /// Meaning and example.
    pub details: EntryDetails,
}

impl Entry {
    /// Create a new entry.
    ///
    /// No validation happens here; use [`crate::EntryDraft`] for user input.
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            details: EntryDetails::new(meaning, example),
        }
    }

    /// The meaning of this entry.
    #[inline]
    pub fn meaning(&self) -> &str {
        &self.details.meaning
    }

    /// The example sentence of this entry.
    #[inline]
    pub fn example(&self) -> &str {
        &self.details.example
    }

    /// Split into key and value.
    pub fn into_parts(self) -> (String, EntryDetails) {
        (self.word, self.details)
    }
}

impl From<(String, EntryDetails)> for Entry {
    fn from((word, details): (String, EntryDetails)) -> Self {
        Self { word, details }
    }
}
