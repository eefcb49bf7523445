//! `SQLite` implementation of the `SnapshotStore` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use fueltrack_core::{RepositoryError, SnapshotSlot, SnapshotStore};

/// `SQLite` implementation of the `SnapshotStore` trait.
///
/// Each slot is one row of a key-value table holding the slot's JSON text.
/// `commit` writes all slots inside a single transaction.
pub struct SqliteSnapshotStore {
    pool: SqlitePool,
}

impl SqliteSnapshotStore {
    /// Create a new `SQLite` snapshot store.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const UPSERT_SQL: &str =
    "INSERT OR REPLACE INTO snapshot_kv (key, value, updated_at) VALUES (?, ?, ?)";

fn storage_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

fn slot_text(slot: SnapshotSlot, bytes: &[u8]) -> Result<&str, RepositoryError> {
    std::str::from_utf8(bytes)
        .map_err(|e| RepositoryError::Serialization(format!("slot {slot} is not UTF-8: {e}")))
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[async_trait]
impl SnapshotStore for SqliteSnapshotStore {
    async fn read(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM snapshot_kv WHERE key = ?")
            .bind(slot.key())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(row.map(|r| r.get::<String, _>("value").into_bytes()))
    }

    async fn write(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), RepositoryError> {
        let text = slot_text(slot, bytes)?;

        sqlx::query(UPSERT_SQL)
            .bind(slot.key())
            .bind(text)
            .bind(timestamp())
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn commit(&self, writes: &[(SnapshotSlot, Vec<u8>)]) -> Result<(), RepositoryError> {
        let updated_at = timestamp();
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        for (slot, bytes) in writes {
            let text = slot_text(*slot, bytes)?;
            sqlx::query(UPSERT_SQL)
                .bind(slot.key())
                .bind(text)
                .bind(&updated_at)
                .execute(&mut *tx)
                .await
                .map_err(storage_error)?;
        }

        tx.commit().await.map_err(storage_error)?;
        tracing::debug!(slots = writes.len(), "Committed snapshot to sqlite");
        Ok(())
    }
}
