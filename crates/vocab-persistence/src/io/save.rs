//! Vocabulary saving operations.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{FileAccess, PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, HEADER_LEN, MAGIC_BYTES, VocabularyFile};

/// Save a vocabulary to a .voc file.
///
/// Uses atomic write (temp file + rename) so the previous snapshot survives a
/// crash or power loss mid-save.
pub fn save_vocabulary(file: &mut VocabularyFile, path: &Path) -> Result<()> {
    file.touch();

    let bytes = serialize_vocabulary(file)?;

    let temp_path = path.with_extension("voc.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            access: FileAccess::CreateDir,
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let replaced = write_temp(&temp_path, &bytes).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| PersistenceError::Replace {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        })
    });

    if let Err(err) = replaced {
        discard_temp(&temp_path);
        return Err(err);
    }

    tracing::info!(
        "Saved {} entries to {}",
        file.entries.len(),
        path.display()
    );
    Ok(())
}

/// Write `bytes` to `temp_path` and fsync it.
fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let io_error = |access: FileAccess| {
        move |source: std::io::Error| PersistenceError::Io {
            access,
            path: temp_path.to_path_buf(),
            source,
        }
    };

    let mut temp = File::create(temp_path).map_err(io_error(FileAccess::Write))?;
    temp.write_all(bytes).map_err(io_error(FileAccess::Write))?;
    temp.sync_all().map_err(io_error(FileAccess::Sync))
}

/// Remove a temp file left by a failed save. The target is never touched.
fn discard_temp(temp_path: &Path) {
    match fs::remove_file(temp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            "Could not remove temporary file {}: {}",
            temp_path.display(),
            e
        ),
    }
}

/// Serialize a vocabulary to bytes.
///
/// Format:
/// - 4 bytes: Magic ("VOC\x01")
/// - 4 bytes: Schema version (u32 little-endian)
/// - N bytes: rkyv payload
fn serialize_vocabulary(file: &VocabularyFile) -> Result<Vec<u8>> {
    let rkyv_bytes =
        rkyv::to_bytes::<rkyv::rancor::Error>(file).map_err(PersistenceError::Encode)?;

    let mut output = Vec::with_capacity(HEADER_LEN + rkyv_bytes.len());
    output.extend_from_slice(&MAGIC_BYTES);
    output.extend_from_slice(&CURRENT_SCHEMA_VERSION.to_le_bytes());
    output.extend_from_slice(&rkyv_bytes);

    Ok(output)
}
