//! Vocabulary loading operations.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{FileAccess, PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, HEADER_LEN, MAGIC_BYTES, VocabularyFile};

/// Load a vocabulary from a .voc file.
///
/// A missing file is an error here; see [`try_load_vocabulary`].
pub fn load_vocabulary(path: &Path) -> Result<VocabularyFile> {
    let bytes = fs::read(path).map_err(|e| PersistenceError::Io {
        access: FileAccess::Read,
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_vocabulary_bytes(&bytes, path)
}

/// Load a vocabulary, returning `Ok(None)` if the file does not exist.
///
/// Any other failure (unreadable, empty, corrupt) is an error.
pub fn try_load_vocabulary(path: &Path) -> Result<Option<VocabularyFile>> {
    match fs::read(path) {
        Ok(bytes) => parse_vocabulary_bytes(&bytes, path).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No vocabulary file at {}, starting empty", path.display());
            Ok(None)
        }
        Err(e) => Err(PersistenceError::Io {
            access: FileAccess::Read,
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Parse vocabulary bytes and validate the format.
fn parse_vocabulary_bytes(bytes: &[u8], path: &Path) -> Result<VocabularyFile> {
    // Header plus at least one payload byte
    if bytes.len() <= HEADER_LEN {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "File too small".to_string(),
        });
    }

    if bytes[0..4] != MAGIC_BYTES {
        return Err(PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            reason: "Not a vocabulary file (invalid magic bytes)".to_string(),
        });
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);

    if version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::NewerSchema {
            path: path.to_path_buf(),
            found: version,
        });
    }

    // rkyv validation needs an aligned buffer
    let mut payload = rkyv::util::AlignedVec::<16>::with_capacity(bytes.len() - HEADER_LEN);
    payload.extend_from_slice(&bytes[HEADER_LEN..]);

    let file: VocabularyFile =
        rkyv::from_bytes::<VocabularyFile, rkyv::rancor::Error>(&payload).map_err(|source| {
            PersistenceError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;

    if let Some(word) = file.duplicate_word() {
        return Err(PersistenceError::DuplicateWord {
            path: path.to_path_buf(),
            word: word.to_string(),
        });
    }

    tracing::info!(
        "Loaded {} entries from {}",
        file.entries.len(),
        path.display()
    );
    Ok(file)
}
