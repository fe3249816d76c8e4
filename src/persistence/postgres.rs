//! PostgreSQL implementation of the counter store.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{CounterStore, PenguinRecord};
use crate::config::DaycareConfig;
use crate::domain::{PenguinId, StatCounters};
use crate::error::DaycareError;

/// PostgreSQL-backed counter store using `sqlx::PgPool`.
///
/// Records live in the `penguin_stats` table, one row per penguin id,
/// created by the embedded migrations in `migrations/`.
#[derive(Debug, Clone)]
pub struct PostgresCounterStore {
    pool: PgPool,
}

impl PostgresCounterStore {
    /// Creates a new store with the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool from `config` and applies pending migrations.
    ///
    /// # Errors
    ///
    /// Returns a [`DaycareError::PersistenceError`] if the database is
    /// unreachable or a migration fails.
    pub async fn connect(config: &DaycareConfig) -> Result<Self, DaycareError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(
                config.database_connect_timeout_secs,
            ))
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(|e| DaycareError::PersistenceError(e.to_string()))?;

        tracing::info!(
            max_connections = config.database_max_connections,
            "connected to counter database"
        );
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl CounterStore for PostgresCounterStore {
    async fn get(&self, id: &PenguinId) -> Result<PenguinRecord, DaycareError> {
        let row = sqlx::query_as::<_, (i64, i64, i64)>(
            "SELECT visit_count, fish_count, bellyrub_count FROM penguin_stats WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some((visit_count, fish_count, bellyrub_count)) => PenguinRecord {
                id: id.clone(),
                counters: StatCounters {
                    visit_count,
                    fish_count,
                    bellyrub_count,
                },
            },
            None => PenguinRecord::zeroed(id.clone()),
        })
    }

    async fn put(&self, record: &PenguinRecord) -> Result<(), DaycareError> {
        sqlx::query(
            "INSERT INTO penguin_stats (id, visit_count, fish_count, bellyrub_count) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET \
             visit_count = EXCLUDED.visit_count, \
             fish_count = EXCLUDED.fish_count, \
             bellyrub_count = EXCLUDED.bellyrub_count, \
             updated_at = now()",
        )
        .bind(record.id.as_str())
        .bind(record.counters.visit_count)
        .bind(record.counters.fish_count)
        .bind(record.counters.bellyrub_count)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
