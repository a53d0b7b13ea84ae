//! In-memory document store.
//!
//! Backs the `mem://` scheme. Records live in an insertion-ordered `Vec`
//! behind a read-write lock; the lock is never held across an await point.

use parking_lot::RwLock;

use crate::error::Result;
use crate::record::{LogRecord, Predicate, SortOrder};
use crate::store::DocumentStore;

/// In-process document store, primarily for tests and development.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<LogRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Removes all records.
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

impl DocumentStore for MemoryStore {
    async fn put(&self, record: &LogRecord) -> Result<()> {
        self.records.write().push(record.clone());
        Ok(())
    }

    async fn find(
        &self,
        predicate: &Predicate,
        order: SortOrder,
        limit: usize,
    ) -> Result<Vec<LogRecord>> {
        let mut matched: Vec<LogRecord> = self
            .records
            .read()
            .iter()
            .filter(|r| predicate.matches(r))
            .cloned()
            .collect();

        order.sort(&mut matched);
        matched.truncate(limit);
        Ok(matched)
    }
}
