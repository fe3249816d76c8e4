//! Persistence layer: durable per-penguin stat counters.
//!
//! Provides the [`CounterStore`] trait, a key-value view of the counters
//! keyed by penguin id. The production implementation uses `sqlx::PgPool`;
//! an in-memory implementation backs local runs with persistence disabled
//! and the test suite.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

pub use memory::InMemoryCounterStore;
pub use models::PenguinRecord;
pub use postgres::PostgresCounterStore;

use crate::domain::PenguinId;
use crate::error::DaycareError;

/// Key-value store holding one [`PenguinRecord`] per penguin id.
///
/// Implementations provide no read-modify-write primitive: callers that
/// increment a counter do `get` then `put`, and concurrent increments of
/// the same id may lose updates.
#[async_trait]
pub trait CounterStore: Send + Sync + std::fmt::Debug {
    /// Returns the stored record for `id`, or a zero-valued record stamped
    /// with `id` when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`DaycareError::PersistenceError`] on backend failure.
    /// A missing record is not an error.
    async fn get(&self, id: &PenguinId) -> Result<PenguinRecord, DaycareError>;

    /// Inserts or replaces the record for `record.id`.
    ///
    /// # Errors
    ///
    /// Returns [`DaycareError::PersistenceError`] on backend failure.
    async fn put(&self, record: &PenguinRecord) -> Result<(), DaycareError>;
}
