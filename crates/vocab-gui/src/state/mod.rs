//! Application state management.
//!
//! - **AppState**: root state owning the entry store and everything the
//!   views render
//! - **ViewState**: which main panel is showing
//! - **ActiveDialog**: the modal dialog on top, if any
//! - **Settings**: persisted preferences

mod dialog;
mod settings;
mod view_state;

pub use dialog::ActiveDialog;
pub use settings::{DisplaySettings, LoggingSettings, Settings, StorageSettings};
pub use view_state::ViewState;

use vocab_core::{EntryStore, QuizSession, Storage, StudyList};

use crate::component::ToastState;
use crate::error::GuiError;

/// The store type the application runs on.
pub type VocabularyStore = EntryStore<Box<dyn Storage>>;

/// Root application state.
pub struct AppState {
    /// `None` when the vocabulary could not be loaded.
    pub store: Option<VocabularyStore>,

    /// Blocking error shown instead of the main window.
    pub load_error: Option<GuiError>,

    /// Current main panel.
    pub view: ViewState,

    /// Reveal toggles for the list, rebuilt after every change.
    pub study: StudyList,

    /// Open modal dialog.
    pub dialog: Option<ActiveDialog>,

    /// Current notification.
    pub toast: Option<ToastState>,

    /// User preferences.
    pub settings: Settings,

    last_toast_id: u64,
}

impl AppState {
    /// Open the store on `storage` and build the initial state.
    ///
    /// A load failure leaves the store closed and records a blocking error;
    /// the file is never touched afterwards.
    pub fn open(settings: Settings, storage: Box<dyn Storage>) -> Self {
        let location = storage.location();

        let (store, load_error) = match EntryStore::open(storage) {
            Ok(store) => (Some(store), None),
            Err(err) => {
                tracing::error!("Failed to load vocabulary from {}: {}", location, err);
                (None, Some(GuiError::store_load(location, &err)))
            }
        };

        let study = store
            .as_ref()
            .map(|store| StudyList::new(store.all()))
            .unwrap_or_default();

        Self {
            store,
            load_error,
            view: ViewState::default(),
            study,
            dialog: None,
            toast: None,
            settings,
            last_toast_id: 0,
        }
    }

    /// Whether the store is open.
    /// Replace the current toast. The new one gets a fresh id, so its
    /// dismiss timer starts over.
    pub fn show_toast(&mut self, mut toast: ToastState) {
        self.last_toast_id += 1;
        toast.id = self.last_toast_id;
        self.toast = Some(toast);
    }

    pub fn is_ready(&self) -> bool {
        self.store.is_some() && !self.load_error.as_ref().is_some_and(GuiError::is_blocking)
    }

    /// Number of entries, zero when the store is closed.
    pub fn entry_count(&self) -> usize {
        self.store.as_ref().map_or(0, EntryStore::len)
    }

    /// Rebuild the study list from the store, hiding every answer.
    pub fn refresh_study_list(&mut self) {
        if let Some(store) = &self.store {
            self.study = StudyList::new(store.all());
        }
    }

    /// Running or finished quiz, if the quiz panel is showing.
    pub fn quiz(&self) -> Option<&QuizSession> {
        match &self.view {
            ViewState::Quiz(session) => Some(session),
            ViewState::Study => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{apple, cat, state_with};
    use super::*;
    use tempfile::tempdir;
    use vocab_core::FileStorage;

    #[test]
    fn test_open_builds_hidden_study_list() {
        let state = state_with(vec![apple(), cat()]);

        assert!(state.is_ready());
        assert_eq!(state.entry_count(), 2);
        assert_eq!(state.study.len(), 2);
        assert_eq!(state.study.revealed_count(), 0);
        assert!(state.quiz().is_none());
    }

    #[test]
    fn test_corrupt_file_blocks() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.voc");
        std::fs::write(&path, b"garbage").unwrap();

        let state = AppState::open(Settings::default(), Box::new(FileStorage::new(&path)));

        assert!(!state.is_ready());
        assert!(state.load_error.as_ref().is_some_and(GuiError::is_blocking));
        assert_eq!(state.entry_count(), 0);
        assert_eq!(std::fs::read(&path).unwrap(), b"garbage");
    }

    #[test]
    fn test_blocking_error_closes_store() {
        let mut state = state_with(vec![apple()]);
        state.load_error = Some(GuiError::StoreLoad {
            location: "vocabulary.voc".to_string(),
            reason: "damaged".to_string(),
            suggestion: None,
        });

        assert!(!state.is_ready());
    }
}
