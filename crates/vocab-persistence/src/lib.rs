//! Durable storage for Vocabulary Studio collections.
//!
//! The whole collection is read once at startup and rewritten in full after
//! every mutation. There are no partial or append writes.
//!
//! # Features
//!
//! - **Typed payload** with rkyv; records that fail to decode reject the load
//! - **Atomic writes** (temp file + rename) so a crash mid-save never
//!   destroys the previous snapshot
//! - **Missing vs. corrupt**: a missing file is an empty collection, an empty
//!   or damaged file is an error
//!
//! # File Format
//!
//! `.voc` files use a simple binary format:
//!
//! ```text
//! +------------------+
//! | Magic: "VOC\x01" | 4 bytes - file identification
//! +------------------+
//! | Version: 1       | 4 bytes - u32 little-endian schema version
//! +------------------+
//! | rkyv Payload     | Variable - VocabularyFile
//! +------------------+
//! ```
//!
//! # Example
//!
//! ```ignore
//! use vocab_model::Entry;
//! use vocab_persistence::{FileStorage, Storage};
//!
//! let mut storage = FileStorage::new("vocabulary.voc");
//! let entries = storage.load()?;
//! storage.save(&[Entry::new("apple", "a fruit", "I ate an apple.")])?;
//! ```

mod convert;
mod error;
mod io;
mod storage;
mod types;

pub use convert::{FromSnapshot, ToSnapshot};
pub use error::{FileAccess, PersistenceError, Result};
pub use io::{load_vocabulary, save_vocabulary, try_load_vocabulary};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use types::{
    CURRENT_SCHEMA_VERSION, DEFAULT_FILE_NAME, EntrySnapshot, HEADER_LEN, MAGIC_BYTES,
    VocabularyFile,
};
