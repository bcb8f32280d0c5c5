//! Entry record type.

use rkyv::{Archive, Deserialize, Serialize};

/// One stored word with its details.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
pub struct EntrySnapshot {
    /// The word (unique within a file).
    pub word: String,

    /// Meaning of the word.
    pub meaning: String,

    /// Example sentence.
    pub example: String,
}

impl EntrySnapshot {
    /// Create a new entry record.
    pub fn new(
        word: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            example: example.into(),
        }
    }
}
