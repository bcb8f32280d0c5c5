//! Unvalidated entry input and its validation rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::Entry;

/// One of the three fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryField {
    Word,
    Meaning,
    Example,
}

impl EntryField {
    /// All fields, in form order.
    pub const ALL: [EntryField; 3] = [Self::Word, Self::Meaning, Self::Example];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Word => "Word",
            Self::Meaning => "Meaning",
            Self::Example => "Example",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entry input rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields are empty or whitespace-only.
    #[error("required fields are empty: {}", join_fields(.0))]
    EmptyFields(Vec<EntryField>),
}

impl ValidationError {
    /// Fields that failed validation.
    pub fn fields(&self) -> &[EntryField] {
        match self {
            Self::EmptyFields(fields) => fields,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyFields(fields) => format!(
                "Enter at least one character for each field ({}).",
                join_fields(fields)
            ),
        }
    }
}

fn join_fields(fields: &[EntryField]) -> String {
    fields
        .iter()
        .map(EntryField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw editor input for a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub word: String,
    pub meaning: String,
    pub example: String,
}

impl EntryDraft {
    /// Create a draft from raw field values.
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

    /// Get the raw value of a field.
    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Word => &self.word,
            EntryField::Meaning => &self.meaning,
            EntryField::Example => &self.example,
        }
    }

    /// Replace the raw value of a field.
    pub fn set_field(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::Word => self.word = value,
            EntryField::Meaning => self.meaning = value,
            EntryField::Example => self.example = value,
        }
    }

    /// Fields that are empty after trimming.
    pub fn empty_fields(&self) -> Vec<EntryField> {
        EntryField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    /// Validate and build a trimmed [`Entry`].
    pub fn validate(&self) -> Result<Entry, ValidationError> {
        let empty = self.empty_fields();
        if !empty.is_empty() {
            return Err(ValidationError::EmptyFields(empty));
        }

        Ok(Entry::new(
            self.word.trim(),
            self.meaning.trim(),
            self.example.trim(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_fields() {
        let entry = EntryDraft::new("  cat ", "an animal\t", " The cat sleeps.")
            .validate()
            .unwrap();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.meaning(), "an animal");
        assert_eq!(entry.example(), "The cat sleeps.");
    }

    #[test]
    fn test_empty_meaning_rejected() {
        let result = EntryDraft::new("cat", "", "The cat sleeps.").validate();
        assert_eq!(
            result,
            Err(ValidationError::EmptyFields(vec![EntryField::Meaning]))
        );
    }

    #[test]
    fn test_whitespace_only_rejected() {
        let err = EntryDraft::new("   ", "an animal", "\n\t")
            .validate()
            .unwrap_err();
        assert_eq!(err.fields(), &[EntryField::Word, EntryField::Example]);
        assert!(err.user_message().contains("Word, Example"));
    }

    #[test]
    fn test_set_field() {
        let mut draft = EntryDraft::default();
        draft.set_field(EntryField::Example, "例文".to_string());
        assert_eq!(draft.field(EntryField::Example), "例文");
    }
}
