//! Snapshot store implementations.
//!
//! Backend handles (`SqlitePool`, file paths) are confined to this module and
//! never exposed through the port trait signatures.

mod file_snapshot_store;
mod sqlite_snapshot_store;

pub use file_snapshot_store::FileSnapshotStore;
pub use sqlite_snapshot_store::SqliteSnapshotStore;
