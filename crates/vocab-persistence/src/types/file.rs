//! Root vocabulary file type.

use chrono::Utc;
use rkyv::{Archive, Deserialize, Serialize};

use super::EntrySnapshot;

/// Root vocabulary file structure.
///
/// This is the top-level type that gets serialized to .voc files.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct VocabularyFile {
    /// Schema version of the payload.
    pub schema_version: u32,

    /// When the collection was first saved.
    pub created_at: String,

    /// When the collection was last saved.
    pub last_saved_at: String,

    /// Every entry of the collection.
    pub entries: Vec<EntrySnapshot>,
}

impl VocabularyFile {
    /// Create a new file with the given entries.
    pub fn new(entries: Vec<EntrySnapshot>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            schema_version: super::CURRENT_SCHEMA_VERSION,
            created_at: now.clone(),
            last_saved_at: now,
            entries,
        }
    }

    /// Update the last saved timestamp.
    pub fn touch(&mut self) {
        self.last_saved_at = Utc::now().to_rfc3339();
    }

    /// First word that occurs more than once, if any.
    pub fn duplicate_word(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::with_capacity(self.entries.len());
        self.entries
            .iter()
            .map(|entry| entry.word.as_str())
            .find(|word| !seen.insert(*word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_file_timestamps() {
        let file = VocabularyFile::new(Vec::new());
        assert_eq!(file.schema_version, super::super::CURRENT_SCHEMA_VERSION);
        assert!(chrono::DateTime::parse_from_rfc3339(&file.created_at).is_ok());
        assert_eq!(file.created_at, file.last_saved_at);
    }

    #[test]
    fn test_duplicate_word() {
        let file = VocabularyFile::new(vec![
            EntrySnapshot::new("apple", "a fruit", "I ate an apple."),
            EntrySnapshot::new("cat", "an animal", "The cat sleeps."),
            EntrySnapshot::new("apple", "a company", "Apple makes phones."),
        ]);
        assert_eq!(file.duplicate_word(), Some("apple"));

        let unique = VocabularyFile::new(vec![EntrySnapshot::new("cat", "an animal", "Meow.")]);
        assert_eq!(unique.duplicate_word(), None);
    }
}
