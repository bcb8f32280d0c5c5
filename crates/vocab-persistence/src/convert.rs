//! Conversion traits between model types and persistence types.

use vocab_model::Entry;

use crate::types::EntrySnapshot;

/// Trait for types that can be converted to a persistence snapshot.
pub trait ToSnapshot {
    /// The snapshot type.
    type Snapshot;

    /// Convert to a snapshot for persistence.
    fn to_snapshot(&self) -> Self::Snapshot;
}

/// Trait for types that can be created from a persistence snapshot.
pub trait FromSnapshot: Sized {
    /// The snapshot type.
    type Snapshot;

    /// Create from a snapshot.
    fn from_snapshot(snapshot: Self::Snapshot) -> Self;
}

impl ToSnapshot for Entry {
    type Snapshot = EntrySnapshot;

    fn to_snapshot(&self) -> EntrySnapshot {
        EntrySnapshot::new(&self.word, self.meaning(), self.example())
    }
}

impl FromSnapshot for Entry {
    type Snapshot = EntrySnapshot;

    fn from_snapshot(snapshot: EntrySnapshot) -> Self {
        Entry::new(snapshot.word, snapshot.meaning, snapshot.example)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_snapshot_conversion() {
        let entry = Entry::new("Straße", "street", "Die Straße ist lang.");
        let snapshot = entry.to_snapshot();
        assert_eq!(snapshot.word, "Straße");
        assert_eq!(Entry::from_snapshot(snapshot), entry);
    }
}
