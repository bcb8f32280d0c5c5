//! Study list: every entry with its own show/hide toggle.
//!
//! Toggles are independent of each other and of any quiz. The list is rebuilt
//! from the store whenever the store changes, which hides everything again.

use vocab_model::Entry;

/// One row of the study list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyItem {
    pub entry: Entry,
    pub revealed: bool,
}

/// Entries with per-item reveal state.
#[derive(Debug, Clone, Default)]
pub struct StudyList {
    items: Vec<StudyItem>,
}

impl StudyList {
    /// Build a list with every item hidden.
    pub fn new(entries: impl IntoIterator<Item = Entry>) -> Self {
        Self {
            items: entries
                .into_iter()
                .map(|entry| StudyItem {
                    entry,
                    revealed: false,
                })
                .collect(),
        }
    }

    /// Flip one item's reveal state; returns the new state, or `None` if the
    /// word is not listed.
    pub fn toggle(&mut self, word: &str) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.entry.word == word)?;
        item.revealed = !item.revealed;
        Some(item.revealed)
    }

    pub fn is_revealed(&self, word: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.revealed && item.entry.word == word)
    }

    pub fn items(&self) -> &[StudyItem] {
        &self.items
    }

    pub fn revealed_count(&self) -> usize {
        self.items.iter().filter(|item| item.revealed).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
