//! Snapshot slots and their JSON encoding.
//!
//! The persisted state is two independently keyed slots: the record array
//! and the vehicle profile object. Each write replaces a slot wholesale.

use serde::{Deserialize, Serialize};

use super::record::FuelRecord;
use super::vehicle::VehicleProfile;

/// A durable slot in the snapshot store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotSlot {
    Records,
    Vehicle,
}

impl SnapshotSlot {
    /// Both slots, in commit order.
    pub const ALL: [Self; 2] = [Self::Records, Self::Vehicle];

    /// Storage key for this slot.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Records => "records_v1",
            Self::Vehicle => "vehicle_v1",
        }
    }
}

impl std::fmt::Display for SnapshotSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The full persisted state: records plus profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub records: Vec<FuelRecord>,
    pub profile: VehicleProfile,
}

impl Snapshot {
    /// Encode both slots for a single commit.
    pub fn encode(&self) -> Result<Vec<(SnapshotSlot, Vec<u8>)>, serde_json::Error> {
        Ok(vec![
            (SnapshotSlot::Records, encode_records(&self.records)?),
            (SnapshotSlot::Vehicle, encode_profile(&self.profile)?),
        ])
    }
}

pub fn encode_records(records: &[FuelRecord]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(records)
}

pub fn decode_records(bytes: &[u8]) -> Result<Vec<FuelRecord>, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn encode_profile(profile: &VehicleProfile) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(profile)
}

pub fn decode_profile(bytes: &[u8]) -> Result<VehicleProfile, serde_json::Error> {
    serde_json::from_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{NewFuelRecord, RecordId};
    use chrono::NaiveDate;

    #[test]
    fn test_slot_keys_are_distinct() {
        assert_ne!(SnapshotSlot::Records.key(), SnapshotSlot::Vehicle.key());
    }

    #[test]
    fn test_encode_produces_both_slots() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let snapshot = Snapshot {
            records: vec![FuelRecord::from_new(
                RecordId::from("r1"),
                "main-car",
                NewFuelRecord::new(date, 40.0, 60.0, 500.0),
            )],
            profile: VehicleProfile::with_defaults(),
        };

        let slots = snapshot.encode().unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].0, SnapshotSlot::Records);

        let records = decode_records(&slots[0].1).unwrap();
        let profile = decode_profile(&slots[1].1).unwrap();
        assert_eq!(records, snapshot.records);
        assert_eq!(profile, snapshot.profile);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_records(b"not json").is_err());
        assert!(decode_profile(b"{\"make\":1}").is_err());
    }
}
