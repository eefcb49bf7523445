//! Command handlers that delegate to the record store.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &mut CliContext, ...) -> Result<()>`
//!   (read-only commands take `&CliContext` and are synchronous)
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `RecordStore` methods or `fueltrack_core::stats`
//!   3. Format output for the terminal
//!
//! Handlers should NOT:
//! - Touch the snapshot store directly
//! - Contain business logic

pub mod add;
pub mod edit;
pub mod export;
pub mod list;
pub mod paths;
pub mod profile;
pub mod remove;
pub mod stats;
