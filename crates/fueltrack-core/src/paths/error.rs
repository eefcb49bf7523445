//! Errors from resolving and preparing the data directory.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no home directory to expand '~' against")]
    NoHomeDir,

    #[error("no platform data directory; pass --data-dir or set FUELTRACK_DATA_DIR")]
    NoDataDir,

    #[error("data path {0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Missing directory under `DirectoryCreationStrategy::Disallow`.
    #[error("data directory {0} does not exist")]
    DirectoryNotFound(PathBuf),

    #[error("cannot create data directory {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data directory {path} is not writable: {source}")]
    NotWritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data directory path is empty")]
    EmptyPath,

    /// A relative path could not be anchored to the working directory.
    #[error("cannot resolve relative data path: {0}")]
    CurrentDir(#[source] std::io::Error),
}
