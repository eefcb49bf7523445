//! Composition utilities for building snapshot stores.
//!
//! This module provides factory functions for wiring the record store to a
//! concrete backend. It is focused purely on construction and should not
//! contain any domain logic.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::SqlitePool;

use fueltrack_core::{DataRootResolution, SnapshotStore};

use crate::repositories::{FileSnapshotStore, SqliteSnapshotStore};
use crate::setup::setup_database;

/// Which backend persists the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// Key-value table in `<data_root>/fueltrack.db`.
    #[default]
    Sqlite,
    /// One JSON file per slot in `<data_root>/snapshots/`.
    Json,
}

impl StorageBackend {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized storage backend name.
#[derive(Debug, thiserror::Error)]
#[error("unknown storage backend '{0}' (expected 'sqlite' or 'json')")]
pub struct UnknownBackend(String);

impl FromStr for StorageBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" | "db" => Ok(Self::Sqlite),
            "json" | "file" | "files" => Ok(Self::Json),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Factory for creating snapshot store instances.
///
/// This struct provides composition utilities only - no domain logic.
pub struct StoreFactory;

impl StoreFactory {
    /// Wrap an existing pool in a snapshot store.
    pub fn sqlite(pool: SqlitePool) -> Arc<dyn SnapshotStore> {
        Arc::new(SqliteSnapshotStore::new(pool))
    }

    /// Snapshot store writing JSON files under `dir`.
    pub fn json(dir: &Path) -> Arc<dyn SnapshotStore> {
        Arc::new(FileSnapshotStore::new(dir))
    }

    /// Open the chosen backend under a resolved data directory.
    ///
    /// Creates the data directory if needed.
    pub async fn open(
        backend: StorageBackend,
        data_root: &DataRootResolution,
    ) -> anyhow::Result<Arc<dyn SnapshotStore>> {
        data_root.ensure()?;
        let store = match backend {
            StorageBackend::Sqlite => {
                let pool = setup_database(&data_root.database_path()).await?;
                Self::sqlite(pool)
            }
            StorageBackend::Json => Self::json(&data_root.snapshot_dir()),
        };
        tracing::debug!(%backend, root = %data_root.path.display(), "Opened snapshot store");
        Ok(store)
    }
}
