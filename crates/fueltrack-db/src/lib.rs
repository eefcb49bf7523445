//! Snapshot store adapters for fueltrack.
//!
//! Implements the `SnapshotStore` port from `fueltrack-core` with a `SQLite`
//! key-value table and with plain JSON files, plus the setup and factory
//! helpers entry points use to pick one.
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::{StorageBackend, StoreFactory, UnknownBackend};

// Re-export repository implementations
pub use repositories::{FileSnapshotStore, SqliteSnapshotStore};

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
