//! Path utilities for fueltrack data directories.
//!
//! This module provides the canonical path resolution for all fueltrack components:
//! - Data root (explicit flag, env var, platform default)
//! - `SQLite` database location
//! - JSON snapshot directory
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod data;
mod ensure;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use error::PathError;

pub use data::{
    DATA_DIR_ENV, DataRootResolution, DataRootSource, database_path, resolve_data_root,
    snapshot_dir,
};

pub use ensure::{DirectoryCreationStrategy, ensure_directory, verify_writable};
