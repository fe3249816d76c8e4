//! Read-through cache over the penguin roster.
//!
//! [`RosterCache`] owns the roster and the time of its last reconciliation
//! with the [`CounterStore`], both behind a single [`tokio::sync::RwLock`].
//! Readers (`exists`, `snapshot`, `len`) share the lock; a refresh holds it
//! exclusively from the staleness check until every counter is applied, so
//! no reader ever sees a half-refreshed roster.
//!
//! Refreshes are wholesale: every penguin is re-read from the store once the
//! TTL has lapsed. The roster is small and bounded, so per-key freshness is
//! not tracked.

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

use super::{Penguin, PenguinId, StatCounters};
use crate::error::DaycareError;
use crate::persistence::CounterStore;

/// Default time a refreshed roster is served without consulting the store.
pub const DEFAULT_TTL: TimeDelta = TimeDelta::minutes(10);

/// Result of a [`RosterCache::refresh_if_stale`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The TTL had not lapsed; the store was not consulted.
    Fresh,
    /// Every penguin's counters were reloaded from the store.
    Refreshed {
        /// Number of penguins reconciled.
        penguins: usize,
    },
}

#[derive(Debug)]
struct RosterState {
    penguins: Vec<Penguin>,
    /// `None` means stale: the next refresh check reconciles unconditionally.
    last_refresh: Option<DateTime<Utc>>,
}

impl RosterState {
    fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        self.last_refresh
            .is_some_and(|last| now.signed_duration_since(last) <= ttl)
    }

    fn apply_counters(&mut self, id: &PenguinId, counters: StatCounters) -> bool {
        match self.penguins.iter_mut().find(|p| p.id == *id) {
            Some(penguin) => {
                penguin.counters = counters;
                true
            }
            None => false,
        }
    }
}

/// The in-memory roster plus its refresh timestamp.
///
/// Length and order of the roster are fixed at construction; only the
/// counters of each entry are ever overwritten, and only by a refresh.
#[derive(Debug)]
pub struct RosterCache {
    state: RwLock<RosterState>,
    ttl: TimeDelta,
}

impl RosterCache {
    /// Builds a cache over a validated roster.
    ///
    /// The cache starts stale, so the first [`refresh_if_stale`] call
    /// always reconciles with the store.
    ///
    /// [`refresh_if_stale`]: Self::refresh_if_stale
    #[must_use]
    pub fn new(penguins: Vec<Penguin>, ttl: TimeDelta) -> Self {
        Self {
            state: RwLock::new(RosterState {
                penguins,
                last_refresh: None,
            }),
            ttl,
        }
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Number of penguins in the roster.
    pub async fn len(&self) -> usize {
        self.state.read().await.penguins.len()
    }

    /// Returns `true` if the roster holds no penguins.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.penguins.is_empty()
    }

    /// Returns `true` if a penguin with this id is on the roster.
    pub async fn exists(&self, id: &PenguinId) -> bool {
        self.state.read().await.penguins.iter().any(|p| p.id == *id)
    }

    /// Returns a copy of the roster in roster-file order.
    pub async fn snapshot(&self) -> Vec<Penguin> {
        self.state.read().await.penguins.clone()
    }

    /// Time of the last reconciliation, or `None` if the roster is stale.
    pub async fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_refresh
    }

    /// Reloads every penguin's counters from `store` if more than the TTL
    /// has passed since the last refresh.
    ///
    /// The timestamp is advanced before the store is read, and the write
    /// lock is held throughout, so concurrent callers never start a second
    /// pass. All records are fetched before any is applied: if one read
    /// fails the roster keeps its previous counters, and the next attempt
    /// waits for the TTL (or [`force_stale`](Self::force_stale)).
    ///
    /// # Errors
    ///
    /// Returns the first [`DaycareError`] raised by the store.
    pub async fn refresh_if_stale(
        &self,
        now: DateTime<Utc>,
        store: &dyn CounterStore,
    ) -> Result<RefreshOutcome, DaycareError> {
        let mut state = self.state.write().await;
        if state.is_fresh(now, self.ttl) {
            return Ok(RefreshOutcome::Fresh);
        }
        state.last_refresh = Some(now);

        let mut records = Vec::with_capacity(state.penguins.len());
        for penguin in &state.penguins {
            records.push(store.get(&penguin.id).await?);
        }

        let mut applied = 0;
        for record in records {
            if state.apply_counters(&record.id, record.counters) {
                applied += 1;
            }
        }

        tracing::debug!(penguins = applied, "roster refreshed from store");
        Ok(RefreshOutcome::Refreshed { penguins: applied })
    }

    /// Marks the roster stale so the next [`refresh_if_stale`] reconciles
    /// regardless of elapsed time.
    ///
    /// [`refresh_if_stale`]: Self::refresh_if_stale
    pub async fn force_stale(&self) {
        self.state.write().await.last_refresh = None;
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::persistence::{InMemoryCounterStore, PenguinRecord};

    fn roster() -> Vec<Penguin> {
        vec![
            Penguin::new(PenguinId::from("p1"), "Pingu", "Noot noot"),
            Penguin::new(PenguinId::from("p2"), "Pinga", "Little sister"),
        ]
    }

    fn counters(visit_count: i64) -> StatCounters {
        StatCounters {
            visit_count,
            ..StatCounters::default()
        }
    }

    async fn seeded_store() -> InMemoryCounterStore {
        let store = InMemoryCounterStore::new();
        let record = PenguinRecord {
            id: PenguinId::from("p2"),
            counters: counters(5),
        };
        assert!(store.put(&record).await.is_ok());
        store
    }

    #[derive(Debug)]
    struct BrokenStore;

    #[async_trait]
    impl CounterStore for BrokenStore {
        async fn get(&self, _id: &PenguinId) -> Result<PenguinRecord, DaycareError> {
            Err(DaycareError::PersistenceError("store offline".to_string()))
        }

        async fn put(&self, _record: &PenguinRecord) -> Result<(), DaycareError> {
            Err(DaycareError::PersistenceError("store offline".to_string()))
        }
    }

    #[tokio::test]
    async fn exists_only_for_roster_ids() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        assert!(cache.exists(&PenguinId::from("p1")).await);
        assert!(!cache.exists(&PenguinId::from("unknown")).await);
        assert!(!cache.exists(&PenguinId::from("")).await);
    }

    #[tokio::test]
    async fn snapshot_preserves_roster_order() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        let ids: Vec<String> = cache
            .snapshot()
            .await
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(ids, ["p1", "p2"]);
        assert_eq!(cache.len().await, 2);
        assert!(!cache.is_empty().await);
    }

    #[tokio::test]
    async fn first_refresh_always_runs() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        let store = seeded_store().await;
        assert!(cache.last_refresh().await.is_none());

        let outcome = cache.refresh_if_stale(Utc::now(), &store).await;
        assert!(matches!(outcome, Ok(RefreshOutcome::Refreshed { penguins: 2 })));

        let snapshot = cache.snapshot().await;
        let counts: Vec<i64> = snapshot.iter().map(|p| p.counters.visit_count).collect();
        assert_eq!(counts, [0, 5]);
    }

    #[tokio::test]
    async fn second_refresh_within_ttl_skips_store() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        let store = seeded_store().await;
        let t0 = Utc::now();

        let _ = cache.refresh_if_stale(t0, &store).await;
        assert_eq!(store.read_count(), 2);

        let outcome = cache.refresh_if_stale(t0 + TimeDelta::minutes(9), &store).await;
        assert!(matches!(outcome, Ok(RefreshOutcome::Fresh)));
        assert_eq!(store.read_count(), 2);
    }

    #[tokio::test]
    async fn ttl_boundary_is_inclusive() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        let store = InMemoryCounterStore::new();
        let t0 = Utc::now();

        let _ = cache.refresh_if_stale(t0, &store).await;
        let at_ttl = cache.refresh_if_stale(t0 + DEFAULT_TTL, &store).await;
        assert!(matches!(at_ttl, Ok(RefreshOutcome::Fresh)));

        let past_ttl = cache
            .refresh_if_stale(t0 + DEFAULT_TTL + TimeDelta::seconds(1), &store)
            .await;
        assert!(matches!(past_ttl, Ok(RefreshOutcome::Refreshed { .. })));
        assert_eq!(store.read_count(), 4);
    }

    #[tokio::test]
    async fn force_stale_triggers_next_refresh() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        let store = seeded_store().await;
        let t0 = Utc::now();

        let _ = cache.refresh_if_stale(t0, &store).await;
        cache.force_stale().await;
        assert!(cache.last_refresh().await.is_none());

        let outcome = cache.refresh_if_stale(t0 + TimeDelta::seconds(1), &store).await;
        assert!(matches!(outcome, Ok(RefreshOutcome::Refreshed { .. })));
        assert_eq!(store.read_count(), 4);
    }

    #[tokio::test]
    async fn refresh_records_timestamp() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        let store = InMemoryCounterStore::new();
        let now = Utc::now();

        let _ = cache.refresh_if_stale(now, &store).await;
        assert_eq!(cache.last_refresh().await, Some(now));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_counters() {
        let cache = RosterCache::new(roster(), DEFAULT_TTL);
        let store = seeded_store().await;
        let t0 = Utc::now();
        let _ = cache.refresh_if_stale(t0, &store).await;

        cache.force_stale().await;
        let t1 = t0 + TimeDelta::seconds(1);
        let outcome = cache.refresh_if_stale(t1, &BrokenStore).await;
        assert!(matches!(outcome, Err(DaycareError::PersistenceError(_))));

        let counts: Vec<i64> = cache
            .snapshot()
            .await
            .iter()
            .map(|p| p.counters.visit_count)
            .collect();
        assert_eq!(counts, [0, 5]);
        // The timestamp was advanced before the failing read.
        assert_eq!(cache.last_refresh().await, Some(t1));
    }

    #[test]
    fn apply_counters_ignores_unknown_ids() {
        let mut state = RosterState {
            penguins: roster(),
            last_refresh: None,
        };
        assert!(state.apply_counters(&PenguinId::from("p1"), counters(2)));
        assert!(!state.apply_counters(&PenguinId::from("ghost"), counters(9)));

        let counts: Vec<i64> = state.penguins.iter().map(|p| p.counters.visit_count).collect();
        assert_eq!(counts, [2, 0]);
    }
}
