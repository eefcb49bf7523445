//! Command-line interface for fueltrack.
//!
//! The binary wires a snapshot store from `fueltrack-db` into the
//! `RecordStore` from `fueltrack-core` and exposes record, profile,
//! statistics and export commands on top of it.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary entry point
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod profile_commands;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
pub use profile_commands::ProfileCommand;
