//! Data model for Vocabulary Studio.
//!
//! A vocabulary collection is a flat mapping from a unique word to its
//! details (meaning and example sentence). This crate holds the types shared
//! by the persistence layer, the core store, and the desktop shell:
//!
//! - [`Entry`]: a complete word/meaning/example triple
//! - [`EntryDetails`]: the value half of the mapping
//! - [`EntryDraft`]: unvalidated editor input, turned into an [`Entry`] by
//!   [`EntryDraft::validate`]
//!
//! # Example
//!
//! ```
//! use vocab_model::EntryDraft;
//!
//! let entry = EntryDraft::new("apple", "a fruit", "I ate an apple.")
//!     .validate()
//!     .unwrap();
//!
//! assert_eq!(entry.word, "apple");
//! assert_eq!(entry.details.meaning, "a fruit");
//! ```

mod draft;
mod entry;

pub use draft::{EntryDraft, EntryField, ValidationError};
pub use entry::{Entry, EntryDetails};
