//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Statistics are computed in `fueltrack-core::stats`

pub mod record_display;
pub mod tables;

// Re-export commonly used items
pub use record_display::{
    display_record_summary, format_record_row, format_station, print_record_header,
};
pub use tables::{format_number, print_separator, truncate_string};
