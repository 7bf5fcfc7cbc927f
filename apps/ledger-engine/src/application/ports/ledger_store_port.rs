//! Ledger Store Port (Driven Port)
//!
//! Interface to the versioned key-value store that owns every record.
//! Investors are keyed by `investor_id`, assets by `isin`, both in one
//! namespace; the key shape is part of the stored data format.

use async_trait::async_trait;

/// Ledger store failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("ledger store unavailable: {message}")]
    Unavailable {
        /// Failure description.
        message: String,
    },

    /// Optimistic concurrency conflict detected at commit.
    #[error("commit conflict on key '{key}'")]
    Conflict {
        /// Conflicting key.
        key: String,
    },

    /// A stored record failed to decode.
    #[error("corrupt record under key '{key}': {message}")]
    CorruptRecord {
        /// Record key.
        key: String,
        /// Decode failure description.
        message: String,
    },
}

impl StoreError {
    /// Corrupt-record error from a codec failure.
    #[must_use]
    pub fn corrupt_record(key: &str, source: &serde_json::Error) -> Self {
        Self::CorruptRecord {
            key: key.to_string(),
            message: source.to_string(),
        }
    }
}

/// Writes staged by one operation, committed together or not at all.
///
/// A mutating operation stages every record it changed into one batch;
/// no state where only one of the records was updated is reachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    writes: Vec<(String, Vec<u8>)>,
}

impl WriteBatch {
    /// Create an empty batch.
    #[must_use]
    pub const fn new() -> Self {
        Self { writes: Vec::new() }
    }

    /// Stage a write.
    pub fn put(&mut self, key: impl Into<String>, value: Vec<u8>) {
        self.writes.push((key.into(), value));
    }

    /// Number of staged writes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// True if nothing is staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Iterate over staged writes in staging order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Vec<u8>)> {
        self.writes.iter()
    }

    /// Consume into the staged writes.
    #[must_use]
    pub fn into_writes(self) -> Vec<(String, Vec<u8>)> {
        self.writes
    }
}

/// Port to the versioned key-value store.
///
/// All reads and writes of one operation form a single unit of work.
/// Detecting conflicting concurrent commits is the store's job; the
/// engine only guarantees that every write it stages is a function of
/// values it read earlier in the same operation.
#[async_trait]
pub trait LedgerStorePort: Send + Sync {
    /// Read the record bytes under `key`, if present.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Atomically apply every staged write, or none of them.
    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;
}
