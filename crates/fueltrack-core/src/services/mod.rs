//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete storage implementations.

mod record_store;

pub use record_store::{LoadReport, RecordStore};
