//! Persistence types for vocabulary serialization.
//!
//! These types are serialized with rkyv. They mirror the model types but are
//! kept separate so the on-disk layout can evolve independently.

mod entry;
mod file;

pub use entry::EntrySnapshot;
pub use file::VocabularyFile;

/// Current schema version.
///
/// The loader rejects files with version > CURRENT_SCHEMA_VERSION.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Magic bytes at the start of .voc files.
///
/// Format: "VOC" + format byte (0x01)
pub const MAGIC_BYTES: [u8; 4] = [b'V', b'O', b'C', 0x01];

/// Size of the magic + version header.
pub const HEADER_LEN: usize = 8;

/// Default file name for the vocabulary collection.
pub const DEFAULT_FILE_NAME: &str = "vocabulary.voc";
