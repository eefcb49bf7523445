//! Domain types for the fuel tracker.
//!
//! These are pure data types with no infrastructure dependencies.

pub mod record;
pub mod snapshot;
pub mod vehicle;

pub use record::{FuelRecord, NewFuelRecord, RecordId, sort_by_date_desc};
pub use snapshot::{Snapshot, SnapshotSlot};
pub use vehicle::{
    DEFAULT_VEHICLE_ID, FuelType, UnitLabels, Units, VehicleProfile, VehicleProfileUpdate,
};
