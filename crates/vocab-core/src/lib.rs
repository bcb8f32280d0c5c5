//! Core logic for Vocabulary Studio.
//!
//! Everything here is UI-independent and runs synchronously on the caller's
//! thread:
//!
//! - [`store`]: the canonical word → details mapping, flushed in full to a
//!   [`Storage`] after every mutation
//! - [`quiz`]: a shuffled, non-repeating quiz over a frozen snapshot
//! - [`study`]: per-entry reveal toggles for the study list
//! - [`editor`]: validated Add and selection-based Delete flows
//!
//! # Example
//!
//! ```
//! use vocab_core::{EntryStore, QuizSession};
//! use vocab_model::Entry;
//! use vocab_persistence::MemoryStorage;
//!
//! let mut store = EntryStore::open(MemoryStorage::new()).unwrap();
//! store.upsert(Entry::new("apple", "a fruit", "I ate an apple.")).unwrap();
//!
//! let mut quiz = QuizSession::start(store.all()).unwrap();
//! assert_eq!(quiz.current_question().unwrap(), "apple");
//! assert_eq!(quiz.reveal().unwrap().meaning, "a fruit");
//! ```

pub mod editor;
mod error;
pub mod quiz;
pub mod store;
pub mod study;

pub use editor::{AddEntryForm, DeleteEntryForm};
pub use error::{EditorError, QuizError, StoreError};
pub use quiz::{QuizSession, QuizState};
pub use store::{EntryStore, Upsert};
pub use study::{StudyItem, StudyList};

pub use vocab_model::{Entry, EntryDetails, EntryDraft, EntryField, ValidationError};
pub use vocab_persistence::{
    DEFAULT_FILE_NAME, FileAccess, FileStorage, MemoryStorage, PersistenceError, Storage,
};
