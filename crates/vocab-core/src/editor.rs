//! Add and Delete flows.
//!
//! The forms hold dialog input between keystrokes and apply it to an
//! [`EntryStore`] on confirm. Invalid input never reaches the store.

use vocab_model::{Entry, EntryDraft, EntryField, ValidationError};
use vocab_persistence::Storage;

use crate::error::EditorError;
use crate::store::{EntryStore, Upsert};

// =============================================================================
// ADD
// =============================================================================

/// Input for a new entry.
#[derive(Debug, Clone, Default)]
pub struct AddEntryForm {
    pub draft: EntryDraft,

    /// Last validation failure, cleared on edit.
    pub error: Option<ValidationError>,
}

impl AddEntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one field and clear any stale validation message.
    pub fn set_field(&mut self, field: EntryField, value: String) {
        self.draft.set_field(field, value);
        self.error = None;
    }

    /// Whether a field is currently flagged as empty.
    pub fn is_invalid(&self, field: EntryField) -> bool {
        self.error
            .as_ref()
            .is_some_and(|err| err.fields().contains(&field))
    }

    /// Validate the draft and upsert it.
    ///
    /// On a validation failure the error is also kept on the form so the
    /// dialog can show it inline.
    pub fn submit<S: Storage>(
        &mut self,
        store: &mut EntryStore<S>,
    ) -> Result<(Entry, Upsert), EditorError> {
        let entry = match self.draft.validate() {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("Rejected new entry: {}", err);
                self.error = Some(err.clone());
                return Err(err.into());
            }
        };

        let outcome = store.upsert(entry.clone())?;
        tracing::info!("Saved word '{}'", entry.word);
        Ok((entry, outcome))
    }
}

// =============================================================================
// DELETE
// =============================================================================

/// Single-selection delete dialog state.
#[derive(Debug, Clone, Default)]
pub struct DeleteEntryForm {
    words: Vec<String>,
    selected: Option<String>,
}

impl DeleteEntryForm {
    /// Snapshot the selectable words.
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            selected: None,
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, word: impl Into<String>) {
        self.selected = Some(word.into());
    }

    /// Delete the selected word.
    ///
    /// A selection that no longer exists in the store is reported as not
    /// found and nothing is written.
    pub fn confirm<S: Storage>(&self, store: &mut EntryStore<S>) -> Result<Entry, EditorError> {
        let word = self.selected.as_deref().ok_or(EditorError::NothingSelected)?;
        let removed = store.delete(word)?;
        tracing::info!("Deleted word '{}'", removed.word);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use vocab_persistence::MemoryStorage;

    fn store_with(entries: Vec<Entry>) -> EntryStore<MemoryStorage> {
        EntryStore::open(MemoryStorage::with_entries(entries)).unwrap()
    }

    #[test]
    fn test_add_with_empty_meaning_is_rejected() {
        let mut store = store_with(Vec::new());
        let mut form = AddEntryForm::new();
        form.set_field(EntryField::Word, "cat".to_string());
        form.set_field(EntryField::Example, "The cat sleeps.".to_string());

        let err = form.submit(&mut store).unwrap_err();

        assert!(matches!(err, EditorError::Validation(_)));
        assert!(form.is_invalid(EntryField::Meaning));
        assert!(!form.is_invalid(EntryField::Word));
        assert!(store.is_empty());
        assert_eq!(store.storage().save_count(), 0);
    }

    #[test]
    fn test_add_whitespace_only_is_rejected() {
        let mut store = store_with(Vec::new());
        let mut form = AddEntryForm {
            draft: EntryDraft::new("  ", "\t", " "),
            error: None,
        };

        let err = form.submit(&mut store).unwrap_err();

        let EditorError::Validation(validation) = err else {
            panic!("expected validation error");
        };
        assert_eq!(validation.fields(), &EntryField::ALL);
        assert_eq!(store.storage().save_count(), 0);
    }

    #[test]
    fn test_add_trims_and_upserts() {
        let mut store = store_with(Vec::new());
        let mut form = AddEntryForm {
            draft: EntryDraft::new(" cat ", "an animal ", " The cat sleeps."),
            error: None,
        };

        let (entry, outcome) = form.submit(&mut store).unwrap();

        assert_eq!(entry, Entry::new("cat", "an animal", "The cat sleeps."));
        assert_eq!(outcome, Upsert::Inserted);
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn test_edit_clears_validation_error() {
        let mut store = store_with(Vec::new());
        let mut form = AddEntryForm::new();
        assert!(form.submit(&mut store).is_err());
        assert!(form.error.is_some());

        form.set_field(EntryField::Word, "c".to_string());

        assert!(form.error.is_none());
    }

    #[test]
    fn test_delete_without_selection() {
        let mut store = store_with(vec![Entry::new("apple", "a fruit", "I ate an apple.")]);
        let form = DeleteEntryForm::new(store.words());

        let err = form.confirm(&mut store).unwrap_err();

        assert!(matches!(err, EditorError::NothingSelected));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_selected_word() {
        let mut store = store_with(vec![Entry::new("apple", "a fruit", "I ate an apple.")]);
        let mut form = DeleteEntryForm::new(store.words());
        form.select("apple");

        let removed = form.confirm(&mut store).unwrap();

        assert_eq!(removed.word, "apple");
        assert!(store.is_empty());
        assert_eq!(store.storage().save_count(), 1);
    }

    #[test]
    fn test_delete_stale_selection() {
        let mut store = store_with(vec![Entry::new("apple", "a fruit", "I ate an apple.")]);
        let mut form = DeleteEntryForm::new(store.words());
        form.select("apple");
        store.delete("apple").unwrap();

        let err = form.confirm(&mut store).unwrap_err();

        assert!(matches!(
            err,
            EditorError::Store(StoreError::NotFound { ref word }) if word == "apple"
        ));
        assert_eq!(store.storage().save_count(), 1);
    }
}
