//! Penguin service: serves the cached roster and records stat events.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Penguin, PenguinId, RosterCache, StatKind};
use crate::error::DaycareError;
use crate::persistence::{CounterStore, PenguinRecord};

/// Result of [`PenguinService::record_stat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatOutcome {
    /// The counter was incremented; holds the record as written.
    Recorded(PenguinRecord),
    /// The id is not on the roster; nothing was read or written.
    UnknownPenguin,
}

/// Orchestration layer for roster reads and stat events.
///
/// Reads are served from the [`RosterCache`], refreshed at most once per
/// TTL. Stat events bypass the cache entirely and go straight to the
/// [`CounterStore`], so an increment only shows up in
/// [`list_penguins`](Self::list_penguins) after the next refresh.
#[derive(Debug, Clone)]
pub struct PenguinService {
    roster: Arc<RosterCache>,
    store: Arc<dyn CounterStore>,
}

impl PenguinService {
    /// Creates a new `PenguinService`.
    #[must_use]
    pub fn new(roster: Arc<RosterCache>, store: Arc<dyn CounterStore>) -> Self {
        Self { roster, store }
    }

    /// Returns a reference to the inner [`RosterCache`].
    #[must_use]
    pub fn roster(&self) -> &Arc<RosterCache> {
        &self.roster
    }

    /// Number of penguins on the roster.
    pub async fn roster_size(&self) -> usize {
        self.roster.len().await
    }

    /// Returns the roster, refreshing its counters first if the TTL has
    /// lapsed at `now`.
    ///
    /// A failed refresh is logged and the previous counters are served:
    /// stale counts are preferred over failing the whole roster read.
    pub async fn list_penguins(&self, now: DateTime<Utc>) -> Vec<Penguin> {
        if let Err(err) = self.roster.refresh_if_stale(now, self.store.as_ref()).await {
            tracing::warn!(error = %err, "roster refresh failed; serving cached counters");
        }
        self.roster.snapshot().await
    }

    /// Marks the roster stale so the next [`list_penguins`](Self::list_penguins)
    /// reloads every counter from the store.
    pub async fn force_refresh(&self) {
        self.roster.force_stale().await;
        tracing::info!("roster marked stale");
    }

    /// Increments one counter of penguin `id` in the store.
    ///
    /// Unknown ids are ignored. The read-increment-write against the store
    /// is not atomic: concurrent events for the same penguin can lose
    /// updates. The in-memory roster is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`DaycareError::PersistenceError`] if the store read or
    /// write fails. Nothing is rolled back; on a failed write the event is
    /// simply lost.
    pub async fn record_stat(
        &self,
        id: &PenguinId,
        kind: StatKind,
    ) -> Result<StatOutcome, DaycareError> {
        if !self.roster.exists(id).await {
            tracing::debug!(%id, kind = kind.as_str(), "ignoring stat for unknown penguin");
            return Ok(StatOutcome::UnknownPenguin);
        }

        let mut record = self.store.get(id).await?;
        record.counters.bump(kind);
        self.store.put(&record).await?;

        tracing::debug!(
            %id,
            kind = kind.as_str(),
            value = record.counters.get(kind),
            "stat recorded"
        );
        Ok(StatOutcome::Recorded(record))
    }
}
