//! Modal dialog state.

use vocab_core::{AddEntryForm, DeleteEntryForm};

/// The dialog currently shown over the main window.
#[derive(Debug, Clone)]
pub enum ActiveDialog {
    /// Add Word: three text fields and confirm.
    Add(AddEntryForm),

    /// Delete Word: single-selection list and confirm.
    Delete(DeleteEntryForm),
}

impl ActiveDialog {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Add(_) => "Add Word",
            Self::Delete(_) => "Delete Word",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(ActiveDialog::Add(AddEntryForm::new()).title(), "Add Word");
        assert_eq!(
            ActiveDialog::Delete(DeleteEntryForm::new(vec!["apple".to_string()])).title(),
            "Delete Word"
        );
    }
}
