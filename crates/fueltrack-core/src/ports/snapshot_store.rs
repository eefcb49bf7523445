//! Snapshot store trait definition.
//!
//! This port defines the durable key-value storage the record store persists
//! into. It deals only in raw bytes per slot; encoding is the caller's job.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::SnapshotSlot;

/// Durable storage for snapshot slots.
///
/// # Design Rules
///
/// - No backend types (`sqlx`, file handles) in signatures
/// - A slot that was never written reads back as `None`
/// - Writes replace the whole slot; there is no patching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the raw bytes stored in a slot.
    async fn read(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, RepositoryError>;

    /// Replace the contents of a slot.
    async fn write(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), RepositoryError>;

    /// Write several slots as one commit.
    ///
    /// The default writes each slot in turn. Backends that support
    /// transactions should override this so a failure leaves no slot changed.
    async fn commit(&self, writes: &[(SnapshotSlot, Vec<u8>)]) -> Result<(), RepositoryError> {
        for (slot, bytes) in writes {
            self.write(*slot, bytes).await?;
        }
        Ok(())
    }
}
