//! Data directory resolution.
//!
//! Resolves where the database and snapshot files live, from an explicit
//! path, an environment variable, or the platform default.

use std::env;
use std::path::{Path, PathBuf};

use super::ensure::{DirectoryCreationStrategy, ensure_directory};
use super::error::PathError;
use super::platform::{normalize_user_path, platform_data_root};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "FUELTRACK_DATA_DIR";

/// How the data directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRootSource {
    /// The user passed an explicit path (e.g., CLI flag).
    Explicit,
    /// The path came from `FUELTRACK_DATA_DIR` / `.env`.
    EnvVar,
    /// Platform default (`~/.local/share/fueltrack` on Linux).
    Default,
}

impl DataRootSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::EnvVar => "env",
            Self::Default => "default",
        }
    }
}

/// Resolution result for the data directory.
#[derive(Debug, Clone)]
pub struct DataRootResolution {
    pub path: PathBuf,
    pub source: DataRootSource,
}

impl DataRootResolution {
    /// `SQLite` database file inside the data directory.
    pub fn database_path(&self) -> PathBuf {
        database_path(&self.path)
    }

    /// Directory holding the JSON snapshot files.
    pub fn snapshot_dir(&self) -> PathBuf {
        snapshot_dir(&self.path)
    }

    /// Create the data directory if needed and check it is writable.
    pub fn ensure(&self) -> Result<(), PathError> {
        ensure_directory(&self.path, DirectoryCreationStrategy::AutoCreate)
    }
}

/// Resolve the data directory.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `FUELTRACK_DATA_DIR` environment variable
/// 3. Platform data directory
pub fn resolve_data_root(explicit: Option<&str>) -> Result<DataRootResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(DataRootResolution {
            path: normalize_user_path(path_str)?,
            source: DataRootSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(DATA_DIR_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(DataRootResolution {
                path: normalize_user_path(&env_path)?,
                source: DataRootSource::EnvVar,
            });
        }
    }

    Ok(DataRootResolution {
        path: platform_data_root()?,
        source: DataRootSource::Default,
    })
}

/// Path of the `SQLite` database under `root`.
pub fn database_path(root: &Path) -> PathBuf {
    root.join("fueltrack.db")
}

/// Path of the snapshot directory under `root`.
pub fn snapshot_dir(root: &Path) -> PathBuf {
    root.join("snapshots")
}
