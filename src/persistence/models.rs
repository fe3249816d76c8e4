//! Stored counter records.

use crate::domain::{PenguinId, StatCounters};

/// A row of the `penguin_stats` table: the durable counters of one penguin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenguinRecord {
    /// Penguin the counters belong to.
    pub id: PenguinId,
    /// Persisted counter values.
    pub counters: StatCounters,
}

impl PenguinRecord {
    /// Returns the record used when the store has nothing for `id`.
    #[must_use]
    pub fn zeroed(id: PenguinId) -> Self {
        Self {
            id,
            counters: StatCounters::default(),
        }
    }
}
