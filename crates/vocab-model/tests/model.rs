//! Tests for vocab-model types.

use vocab_model::{Entry, EntryDraft, EntryField, ValidationError};

#[test]
fn entry_serializes() {
    let entry = Entry::new("café", "a coffee shop", "Meet me at the café.");
    let json = serde_json::to_string(&entry).expect("serialize entry");
    let round: Entry = serde_json::from_str(&json).expect("deserialize entry");
    assert_eq!(round, entry);
}

#[test]
fn entry_missing_field_is_rejected() {
    let json = r#"{"word":"apple","details":{"meaning":"a fruit"}}"#;
    let result: Result<Entry, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[test]
fn draft_reports_every_empty_field() {
    let err = EntryDraft::default().validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyFields(vec![
            EntryField::Word,
            EntryField::Meaning,
            EntryField::Example,
        ])
    );
    assert_eq!(
        err.to_string(),
        "required fields are empty: Word, Meaning, Example"
    );
}
