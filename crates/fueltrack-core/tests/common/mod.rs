//! Common test utilities.
//!
//! Shared in-memory snapshot store and record fixtures for integration tests.

pub mod fixtures;
pub mod memory_store;
