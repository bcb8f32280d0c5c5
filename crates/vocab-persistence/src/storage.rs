//! Storage backends for a vocabulary collection.
//!
//! The contract is "whole collection in, whole collection out": `load` is
//! called once at startup and `save` after every mutation.

use std::path::{Path, PathBuf};

use vocab_model::Entry;

use crate::convert::{FromSnapshot, ToSnapshot};
use crate::error::Result;
use crate::io::{save_vocabulary, try_load_vocabulary};
use crate::types::VocabularyFile;

/// Durable storage for a vocabulary collection.
pub trait Storage {
    /// Read the full collection. A storage that was never written yields an
    /// empty collection; unreadable contents are an error.
    fn load(&mut self) -> Result<Vec<Entry>>;

    /// Replace the stored collection with `entries`.
    fn save(&mut self, entries: &[Entry]) -> Result<()>;

    /// Human-readable location, for logs and error screens.
    fn location(&self) -> String;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&mut self) -> Result<Vec<Entry>> {
        (**self).load()
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        (**self).save(entries)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// Storage backed by a single .voc file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,

    /// Creation timestamp carried across saves once the file has been read.
    created_at: Option<String>,
}

impl FileStorage {
    /// Create a storage for the given file path. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            created_at: None,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn load(&mut self) -> Result<Vec<Entry>> {
        let Some(file) = try_load_vocabulary(&self.path)? else {
            return Ok(Vec::new());
        };

        self.created_at = Some(file.created_at);
        Ok(file
            .entries
            .into_iter()
            .map(Entry::from_snapshot)
            .collect())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let mut file = VocabularyFile::new(entries.iter().map(ToSnapshot::to_snapshot).collect());
        if let Some(created_at) = &self.created_at {
            file.created_at = created_at.clone();
        }

        save_vocabulary(&mut file, &self.path)?;
        self.created_at = Some(file.created_at);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-process storage that keeps the last saved collection in memory.
///
/// Counts writes so callers can check whether a mutation was flushed.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    saved: Option<Vec<Entry>>,
    save_count: usize,
}

impl MemoryStorage {
    /// Empty storage that has never been written.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a collection, as if saved by an earlier run.
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        Self {
            saved: Some(entries),
            save_count: 0,
        }
    }

    /// The last saved collection, if any.
    pub fn saved(&self) -> Option<&[Entry]> {
        self.saved.as_deref()
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl Storage for MemoryStorage {
    fn load(&mut self) -> Result<Vec<Entry>> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.saved = Some(entries.to_vec());
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_vocabulary;
    use tempfile::tempdir;

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("vocabulary.voc"));

        assert!(storage.load().unwrap().is_empty());
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_file_storage_keeps_created_at() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocabulary.voc");

        let mut storage = FileStorage::new(&path);
        storage
            .save(&[Entry::new("apple", "a fruit", "I ate an apple.")])
            .unwrap();
        let created = load_vocabulary(&path).unwrap().created_at;

        let mut reopened = FileStorage::new(&path);
        let entries = reopened.load().unwrap();
        reopened.save(&entries).unwrap();

        assert_eq!(load_vocabulary(&path).unwrap().created_at, created);
    }

    #[test]
    fn test_memory_storage_counts_saves() {
        let mut storage = MemoryStorage::new();
        assert!(storage.saved().is_none());

        storage.save(&[Entry::new("a", "b", "c")]).unwrap();
        storage.save(&[]).unwrap();

        assert_eq!(storage.save_count(), 2);
        assert_eq!(storage.saved(), Some(&[][..]));
        assert_eq!(storage.location(), "<memory>");
    }

    #[test]
    fn test_boxed_storage_delegates() {
        let mut storage: Box<dyn Storage> =
            Box::new(MemoryStorage::with_entries(vec![Entry::new("a", "b", "c")]));

        assert_eq!(storage.load().unwrap().len(), 1);
        storage.save(&[]).unwrap();
        assert!(storage.load().unwrap().is_empty());
        assert_eq!(storage.location(), "<memory>");
    }
}
