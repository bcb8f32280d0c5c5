//! The entry store: canonical in-memory vocabulary for the process lifetime.
//!
//! Entries are keyed by word and iterate in word order. Every successful
//! mutation writes the whole collection through the store's [`Storage`]; a
//! failed write rolls the mutation back so memory never runs ahead of disk.

use std::collections::BTreeMap;

use vocab_model::{Entry, EntryDetails};
use vocab_persistence::Storage;

use crate::error::StoreError;

/// Outcome of [`EntryStore::upsert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert {
    /// The word was new.
    Inserted,
    /// The word existed; holds the details it had before.
    Replaced(EntryDetails),
}

/// Mapping from word to details, backed by durable storage.
#[derive(Debug)]
pub struct EntryStore<S> {
    entries: BTreeMap<String, EntryDetails>,
    storage: S,
}

impl<S: Storage> EntryStore<S> {
    /// Load the store from `storage`.
    ///
    /// Storage that was never written gives an empty store. Unreadable or
    /// corrupt storage is an error and no store is created, so nothing can
    /// overwrite it.
    pub fn open(mut storage: S) -> Result<Self, StoreError> {
        let loaded = match storage.load() {
            Ok(loaded) => loaded,
            Err(err) => {
                if err.is_corruption() {
                    tracing::error!("Refusing to open {}: {}", storage.location(), err);
                }
                return Err(err.into());
            }
        };
        let entries: BTreeMap<_, _> = loaded.into_iter().map(Entry::into_parts).collect();

        tracing::info!(
            "Opened vocabulary with {} entries from {}",
            entries.len(),
            storage.location()
        );

        Ok(Self { entries, storage })
    }

    /// Insert a new entry or overwrite the details of an existing word.
    ///
    /// Fields are stored as given; validation belongs to the editor.
    pub fn upsert(&mut self, entry: Entry) -> Result<Upsert, StoreError> {
        let (word, details) = entry.into_parts();
        let previous = self.entries.insert(word.clone(), details);

        if let Err(err) = self.flush() {
            match previous {
                Some(details) => {
                    self.entries.insert(word, details);
                }
                None => {
                    self.entries.remove(&word);
                }
            }
            return Err(err);
        }

        Ok(match previous {
            Some(details) => {
                tracing::debug!("Replaced details of '{}'", word);
                Upsert::Replaced(details)
            }
            None => {
                tracing::debug!("Added '{}'", word);
                Upsert::Inserted
            }
        })
    }

    /// Remove a word, returning the removed entry.
    ///
    /// An unknown word is reported as [`StoreError::NotFound`] and nothing is
    /// written.
    pub fn delete(&mut self, word: &str) -> Result<Entry, StoreError> {
        let Some(details) = self.entries.remove(word) else {
            return Err(StoreError::NotFound {
                word: word.to_string(),
            });
        };

        if let Err(err) = self.flush() {
            self.entries.insert(word.to_string(), details);
            return Err(err);
        }

        tracing::debug!("Deleted '{}'", word);
        Ok(Entry::from((word.to_string(), details)))
    }

    /// Write the whole collection to storage.
    fn flush(&mut self) -> Result<(), StoreError> {
        let snapshot = self.all();
        self.storage.save(&snapshot).map_err(|err| {
            tracing::error!(
                "Failed to save vocabulary to {}: {}",
                self.storage.location(),
                err
            );
            StoreError::from(err)
        })
    }

    /// Access the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S> EntryStore<S> {
    /// Snapshot of every entry, in iteration order.
    pub fn all(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .map(|(word, details)| Entry::from((word.clone(), details.clone())))
            .collect()
    }

    /// Details for a word.
    pub fn get(&self, word: &str) -> Option<&EntryDetails> {
        self.entries.get(word)
    }

    /// Every word, in iteration order.
    pub fn words(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
