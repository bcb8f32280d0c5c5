//! Add Word and Delete Word dialog messages.

use vocab_core::EntryField;

/// Add Word dialog messages.
#[derive(Debug, Clone)]
pub enum AddMessage {
    /// Open an empty dialog
    Open,

    /// A text field was edited
    FieldChanged(EntryField, String),

    /// Confirm button or Enter in a field
    Submit,

    /// Close without saving
    Cancel,
}

/// Delete Word dialog messages.
#[derive(Debug, Clone)]
pub enum DeleteMessage {
    /// Open the dialog with the current word list
    Open,

    /// A word was picked
    Selected(String),

    /// Delete the selected word
    Confirm,

    /// Close without deleting
    Cancel,
}
