//! In-memory `SnapshotStore` used in place of a real backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use fueltrack_core::{RepositoryError, SnapshotSlot, SnapshotStore};

#[derive(Default)]
pub struct MemorySnapshotStore {
    slots: Mutex<HashMap<SnapshotSlot, Vec<u8>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw bytes, as if written by an earlier session.
    pub fn seed(&self, slot: SnapshotSlot, bytes: &[u8]) {
        self.slots.lock().unwrap().insert(slot, bytes.to_vec());
    }

    /// Current raw contents of a slot as text.
    pub fn slot_text(&self, slot: SnapshotSlot) -> Option<String> {
        self.slots
            .lock()
            .unwrap()
            .get(&slot)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn read(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, RepositoryError> {
        Ok(self.slots.lock().unwrap().get(&slot).cloned())
    }

    async fn write(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), RepositoryError> {
        self.slots.lock().unwrap().insert(slot, bytes.to_vec());
        Ok(())
    }
}
