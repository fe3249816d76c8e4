//! In-memory counter store.
//!
//! Used when `PERSISTENCE_ENABLED=false` and by the test suite. Counts
//! every `get` and `put` so callers can observe how often the store was
//! consulted.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CounterStore, PenguinRecord};
use crate::domain::PenguinId;
use crate::error::DaycareError;

/// Process-local [`CounterStore`] backed by a `HashMap`.
///
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    records: RwLock<HashMap<PenguinId, PenguinRecord>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryCounterStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `get` calls served so far.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Number of `put` calls served so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Number of distinct ids holding a record.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns `true` if no record has been written yet.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CounterStore for InMemoryCounterStore {
    async fn get(&self, id: &PenguinId) -> Result<PenguinRecord, DaycareError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let records = self.records.read().await;
        Ok(records
            .get(id)
            .cloned()
            .unwrap_or_else(|| PenguinRecord::zeroed(id.clone())))
    }

    async fn put(&self, record: &PenguinRecord) -> Result<(), DaycareError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(())
    }
}
