//! In-memory ledger store for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{LedgerStorePort, StoreError, WriteBatch};

/// In-memory implementation of `LedgerStorePort`.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    records: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryLedgerStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }

    /// Clear all records.
    pub fn clear(&self) {
        let mut records = self.records.write().unwrap();
        records.clear();
    }

    /// Insert a record directly (for test setup).
    pub fn seed(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut records = self.records.write().unwrap();
        records.insert(key.into(), value);
    }

    /// Read a record directly (for test assertions).
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<Vec<u8>> {
        self.records.read().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl LedgerStorePort for InMemoryLedgerStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let records = self.records.read().unwrap();
        Ok(records.get(key).cloned())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        // One write lock for the whole batch: both records or neither.
        let mut records = self.records.write().unwrap();
        for (key, value) in batch.into_writes() {
            records.insert(key, value);
        }
        Ok(())
    }
}
