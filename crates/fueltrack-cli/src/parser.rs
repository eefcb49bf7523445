//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use fueltrack_db::StorageBackend;

use crate::commands::Commands;

/// Command-line interface for the fuel tracker.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "fueltrack")]
#[command(about = "Track fill-ups, fuel costs and efficiency for your vehicle")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation
    ///
    /// Falls back to FUELTRACK_DATA_DIR, then the platform data directory.
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Storage backend for the snapshot (sqlite or json)
    #[arg(
        long,
        global = true,
        env = "FUELTRACK_BACKEND",
        default_value_t = StorageBackend::Sqlite
    )]
    pub backend: StorageBackend,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
