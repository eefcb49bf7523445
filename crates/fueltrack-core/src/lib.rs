//! Core domain, record store and statistics for fueltrack.
//!
//! This crate owns the fuel-record domain model, the `SnapshotStore` port,
//! the `RecordStore` service built on it, and the pure statistics engine.
//! Storage adapters live in `fueltrack-db`; presentation in `fueltrack-cli`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod export;
pub mod paths;
pub mod ports;
pub mod services;
pub mod stats;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    DEFAULT_VEHICLE_ID, FuelRecord, FuelType, NewFuelRecord, RecordId, Snapshot, SnapshotSlot,
    UnitLabels, Units, VehicleProfile, VehicleProfileUpdate, sort_by_date_desc,
};
pub use export::{CSV_HEADER, ExportError, export_file_name, to_csv_string, write_csv};
pub use ports::{CoreError, RepositoryError, SnapshotStore};
pub use services::{LoadReport, RecordStore};
pub use stats::{
    DEFAULT_STATION_LIMIT, DEFAULT_TREND_POINTS, DashboardStats, StationUsage, Totals,
    TrendPoint, aggregate_totals, dashboard, per_record_efficiency, recent_trend,
    station_breakdown,
};
pub use validation::{RecordInputError, validate_new_record};

pub use paths::{DataRootResolution, DataRootSource, PathError, resolve_data_root};
