//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The data directory is resolved, the chosen snapshot
//! store is opened via `fueltrack-db`, and the `RecordStore` is loaded from it.
//!
//! Command handlers receive the composed `CliContext` and delegate work to it.

use std::sync::Arc;

use anyhow::Result;
use fueltrack_core::paths::resolve_data_root;
use fueltrack_core::{DataRootResolution, LoadReport, RecordStore, SnapshotStore};
use fueltrack_db::{StorageBackend, StoreFactory};

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit data directory from `--data-dir`.
    pub data_dir: Option<String>,
    /// Which snapshot store to open.
    pub backend: StorageBackend,
}

impl CliConfig {
    pub const fn new(data_dir: Option<String>, backend: StorageBackend) -> Self {
        Self { data_dir, backend }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The loaded record store.
    pub store: RecordStore,
    /// Where the data lives and how that was decided.
    pub data_root: DataRootResolution,
    /// Backend the store was opened with.
    pub backend: StorageBackend,
    /// Slots that were unreadable at load and reset to defaults.
    pub load_report: LoadReport,
}

impl CliContext {
    /// Access the record store.
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Mutable access for commands that change state.
    pub const fn store_mut(&mut self) -> &mut RecordStore {
        &mut self.store
    }
}

/// Bootstrap the CLI application.
///
/// Resolves the data directory, opens the configured backend and loads the
/// snapshot. Unreadable slots are reported on stderr but do not abort.
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let data_root = resolve_data_root(config.data_dir.as_deref()).map_err(CliError::from)?;

    let store = StoreFactory::open(config.backend, &data_root)
        .await
        .map_err(|e| CliError::Storage(format!("{e:#}")))?;

    bootstrap_with(store, data_root, config.backend).await
}

/// Bootstrap with an already-built snapshot store (for testing).
pub async fn bootstrap_with(
    snapshot_store: Arc<dyn SnapshotStore>,
    data_root: DataRootResolution,
    backend: StorageBackend,
) -> Result<CliContext> {
    let (store, load_report) = RecordStore::open(snapshot_store)
        .await
        .map_err(CliError::from)?;

    for slot in &load_report.recovered {
        eprintln!("Warning: stored data for '{slot}' could not be read and was reset to defaults.");
    }

    tracing::debug!(
        root = %data_root.path.display(),
        source = data_root.source.as_str(),
        %backend,
        records = store.len(),
        "CLI context ready"
    );

    Ok(CliContext {
        store,
        data_root,
        backend,
        load_report,
    })
}
