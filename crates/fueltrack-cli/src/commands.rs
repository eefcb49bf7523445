//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use fueltrack_core::{DEFAULT_STATION_LIMIT, DEFAULT_TREND_POINTS};

use crate::profile_commands::ProfileCommand;

/// Available commands for the fuel tracker.
#[derive(Subcommand)]
pub enum Commands {
    /// Show resolved paths for the data directory and storage backend
    Paths,

    /// Record a fill-up
    Add {
        /// Fuel purchased (L or gal, per profile units)
        #[arg(short, long)]
        amount: f64,
        /// Total price paid
        #[arg(short, long)]
        cost: f64,
        /// Distance driven since the previous fill-up (km or mi)
        #[arg(short, long)]
        distance: f64,
        /// Fill-up date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Station name
        #[arg(short, long)]
        station: Option<String>,
        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List recorded fill-ups, newest first
    List {
        /// Only show fill-ups whose station or date contains this term
        search: Option<String>,
        /// Show at most this many rows
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Change fields of an existing fill-up
    Edit {
        /// Record ID (see `fueltrack list`)
        id: String,
        #[arg(short, long)]
        amount: Option<f64>,
        #[arg(short, long)]
        cost: Option<f64>,
        #[arg(short, long)]
        distance: Option<f64>,
        /// New date as YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
        /// New station name (empty string clears it)
        #[arg(short, long)]
        station: Option<String>,
        /// New notes (empty string clears them)
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete a fill-up
    Remove {
        /// Record ID to remove
        id: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// View or change the vehicle profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Show totals, efficiency trend and station usage
    Stats {
        /// Number of recent fill-ups in the trend
        #[arg(long, default_value_t = DEFAULT_TREND_POINTS)]
        trend: usize,
        /// Number of stations in the usage breakdown
        #[arg(long, default_value_t = DEFAULT_STATION_LIMIT)]
        stations: usize,
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the fill-up history as CSV
    Export {
        /// Output file (defaults to fueltrack_export_<today>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
