//! Record store service - owns the canonical record list and vehicle profile.
//!
//! Every mutation builds the next snapshot, commits both slots through the
//! `SnapshotStore` port, and only then replaces the in-memory state. A failed
//! commit leaves the store exactly as it was.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::snapshot::{decode_profile, decode_records};
use crate::domain::{
    FuelRecord, NewFuelRecord, RecordId, Snapshot, SnapshotSlot, VehicleProfile,
    sort_by_date_desc,
};
use crate::ports::{CoreError, RepositoryError, SnapshotStore};
use crate::stats::{DashboardStats, dashboard};

/// Outcome of loading the persisted snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Slots whose stored bytes could not be decoded and were reset to defaults.
    pub recovered: Vec<SnapshotSlot>,
}

impl LoadReport {
    /// True when every present slot decoded cleanly.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.recovered.is_empty()
    }
}

/// The single authoritative store of fuel records and the vehicle profile.
///
/// Records are always held in canonical order: date descending, ties in
/// insertion order with the newest insertion first.
pub struct RecordStore {
    store: Arc<dyn SnapshotStore>,
    snapshot: Snapshot,
}

impl RecordStore {
    /// Create an empty store backed by `store`. Nothing is read until `load`.
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            store,
            snapshot: Snapshot::default(),
        }
    }

    /// Create a store and load the persisted snapshot.
    pub async fn open(store: Arc<dyn SnapshotStore>) -> Result<(Self, LoadReport), CoreError> {
        let mut record_store = Self::new(store);
        let report = record_store.load().await?;
        Ok((record_store, report))
    }

    /// Replace the in-memory state with the persisted snapshot.
    ///
    /// Missing slots resolve to an empty record list and the default profile.
    /// A slot that holds undecodable data is treated as missing and listed in
    /// the returned report; only a failing backend is an error.
    pub async fn load(&mut self) -> Result<LoadReport, CoreError> {
        let mut report = LoadReport::default();

        let mut records = match self.store.read(SnapshotSlot::Records).await? {
            None => Vec::new(),
            Some(bytes) => decode_records(&bytes).unwrap_or_else(|err| {
                warn!(slot = %SnapshotSlot::Records, error = %err, "Discarding unreadable snapshot slot");
                report.recovered.push(SnapshotSlot::Records);
                Vec::new()
            }),
        };
        sort_by_date_desc(&mut records);

        let profile = match self.store.read(SnapshotSlot::Vehicle).await? {
            None => VehicleProfile::with_defaults(),
            Some(bytes) => decode_profile(&bytes).unwrap_or_else(|err| {
                warn!(slot = %SnapshotSlot::Vehicle, error = %err, "Discarding unreadable snapshot slot");
                report.recovered.push(SnapshotSlot::Vehicle);
                VehicleProfile::with_defaults()
            }),
        };

        info!(
            records = records.len(),
            vehicle = %profile.display_name(),
            "Loaded fuel snapshot"
        );
        self.snapshot = Snapshot { records, profile };
        Ok(report)
    }

    /// Records in canonical order.
    pub fn records(&self) -> &[FuelRecord] {
        &self.snapshot.records
    }

    pub fn profile(&self) -> &VehicleProfile {
        &self.snapshot.profile
    }

    /// The full current state.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.snapshot.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.records.is_empty()
    }

    /// Look up a record by id.
    pub fn get(&self, id: &RecordId) -> Option<&FuelRecord> {
        self.snapshot.records.iter().find(|r| &r.id == id)
    }

    /// Records matching a history search term, in canonical order.
    pub fn search(&self, term: &str) -> Vec<&FuelRecord> {
        self.snapshot
            .records
            .iter()
            .filter(|r| r.matches_search(term))
            .collect()
    }

    /// Summary statistics for the current state.
    pub fn dashboard(&self) -> DashboardStats {
        dashboard(&self.snapshot.records, &self.snapshot.profile)
    }

    /// Add a new record, assigning its id and vehicle reference.
    ///
    /// The record is placed by date, not appended, so adding an old fill-up
    /// lands it in the middle of history.
    pub async fn add_record(&mut self, input: NewFuelRecord) -> Result<FuelRecord, CoreError> {
        let mut id = RecordId::generate();
        while self.get(&id).is_some() {
            id = RecordId::generate();
        }

        let record = FuelRecord::from_new(id, self.snapshot.profile.id.clone(), input);

        let mut records = Vec::with_capacity(self.snapshot.records.len() + 1);
        records.push(record.clone());
        records.extend(self.snapshot.records.iter().cloned());
        sort_by_date_desc(&mut records);

        self.commit(Snapshot {
            records,
            profile: self.snapshot.profile.clone(),
        })
        .await?;

        debug!(id = %record.id, date = %record.date, "Added fuel record");
        Ok(record)
    }

    /// Replace the record with the same id, then restore canonical order.
    ///
    /// Unknown ids are ignored and nothing is written.
    pub async fn update_record(&mut self, record: FuelRecord) -> Result<(), CoreError> {
        let Some(position) = self.position(&record.id) else {
            debug!(id = %record.id, "Ignoring update for unknown record");
            return Ok(());
        };

        let id = record.id.clone();
        let mut records = self.snapshot.records.clone();
        records[position] = record;
        sort_by_date_desc(&mut records);

        self.commit(Snapshot {
            records,
            profile: self.snapshot.profile.clone(),
        })
        .await?;

        debug!(id = %id, "Updated fuel record");
        Ok(())
    }

    /// Remove the record with the given id.
    ///
    /// Unknown ids are ignored and nothing is written.
    pub async fn delete_record(&mut self, id: &RecordId) -> Result<(), CoreError> {
        if self.position(id).is_none() {
            debug!(id = %id, "Ignoring delete for unknown record");
            return Ok(());
        }

        let records = self
            .snapshot
            .records
            .iter()
            .filter(|r| &r.id != id)
            .cloned()
            .collect();

        self.commit(Snapshot {
            records,
            profile: self.snapshot.profile.clone(),
        })
        .await?;

        debug!(id = %id, "Deleted fuel record");
        Ok(())
    }

    /// Replace the whole vehicle profile.
    ///
    /// Record values are untouched, including when `units` changes.
    pub async fn update_profile(&mut self, profile: VehicleProfile) -> Result<(), CoreError> {
        self.commit(Snapshot {
            records: self.snapshot.records.clone(),
            profile,
        })
        .await?;

        debug!(vehicle = %self.snapshot.profile.display_name(), "Updated vehicle profile");
        Ok(())
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.snapshot.records.iter().position(|r| &r.id == id)
    }

    /// Persist both slots, then adopt `next` as the current state.
    async fn commit(&mut self, next: Snapshot) -> Result<(), CoreError> {
        let writes = next.encode().map_err(RepositoryError::from)?;
        self.store.commit(&writes).await?;
        self.snapshot = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Units;
    use crate::ports::MockSnapshotStore;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        slots: Mutex<HashMap<SnapshotSlot, Vec<u8>>>,
        writes: Mutex<usize>,
    }

    impl MemoryStore {
        fn with_slot(slot: SnapshotSlot, bytes: &[u8]) -> Self {
            let store = Self::default();
            store.slots.lock().unwrap().insert(slot, bytes.to_vec());
            store
        }

        fn write_count(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl SnapshotStore for MemoryStore {
        async fn read(&self, slot: SnapshotSlot) -> Result<Option<Vec<u8>>, RepositoryError> {
            Ok(self.slots.lock().unwrap().get(&slot).cloned())
        }

        async fn write(&self, slot: SnapshotSlot, bytes: &[u8]) -> Result<(), RepositoryError> {
            *self.writes.lock().unwrap() += 1;
            self.slots.lock().unwrap().insert(slot, bytes.to_vec());
            Ok(())
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn fill_up(day: &str, station: &str) -> NewFuelRecord {
        NewFuelRecord::new(date(day), 40.0, 60.0, 500.0).with_station(station)
    }

    async fn reopen(backend: &Arc<MemoryStore>) -> RecordStore {
        let (store, report) = RecordStore::open(backend.clone()).await.unwrap();
        assert!(report.is_clean());
        store
    }

    #[tokio::test]
    async fn test_load_empty_returns_defaults() {
        let backend = Arc::new(MemoryStore::default());
        let store = reopen(&backend).await;

        assert!(store.is_empty());
        assert_eq!(store.profile(), &VehicleProfile::with_defaults());
        assert_eq!(backend.write_count(), 0);
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_vehicle() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;

        let record = store.add_record(fill_up("2024-03-01", "Shell")).await.unwrap();

        assert_eq!(record.vehicle_id, store.profile().id);
        assert_eq!(store.get(&record.id), Some(&record));
        assert_eq!(backend.write_count(), 2);
    }

    #[tokio::test]
    async fn test_add_older_record_keeps_date_order() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;

        let newer = store.add_record(fill_up("2024-06-01", "BP")).await.unwrap();
        let older = store.add_record(fill_up("2024-01-01", "Shell")).await.unwrap();
        let middle = store.add_record(fill_up("2024-03-15", "Esso")).await.unwrap();

        let ids: Vec<&RecordId> = store.records().iter().map(|r| &r.id).collect();
        assert_eq!(ids, vec![&newer.id, &middle.id, &older.id]);
    }

    #[tokio::test]
    async fn test_same_day_newest_insertion_first() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;

        let first = store.add_record(fill_up("2024-03-01", "Shell")).await.unwrap();
        let second = store.add_record(fill_up("2024-03-01", "BP")).await.unwrap();

        assert_eq!(store.records()[0].id, second.id);
        assert_eq!(store.records()[1].id, first.id);
    }

    #[tokio::test]
    async fn test_update_replaces_and_resorts() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;

        let a = store.add_record(fill_up("2024-01-01", "Shell")).await.unwrap();
        let b = store.add_record(fill_up("2024-02-01", "BP")).await.unwrap();

        let mut edited = a.clone();
        edited.date = date("2024-05-01");
        edited.station = "Shell V-Power".to_string();
        store.update_record(edited.clone()).await.unwrap();

        assert_eq!(store.records()[0], edited);
        assert_eq!(store.records()[1].id, b.id);

        let reloaded = reopen(&backend).await;
        assert_eq!(reloaded.records(), store.records());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;
        let record = store.add_record(fill_up("2024-01-01", "Shell")).await.unwrap();
        let writes_before = backend.write_count();

        let mut stranger = record.clone();
        stranger.id = RecordId::from("missing");
        store.update_record(stranger).await.unwrap();

        assert_eq!(store.records(), std::slice::from_ref(&record));
        assert_eq!(backend.write_count(), writes_before);
    }

    #[tokio::test]
    async fn test_delete_twice_is_idempotent() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;
        let keep = store.add_record(fill_up("2024-01-01", "Shell")).await.unwrap();
        let gone = store.add_record(fill_up("2024-02-01", "BP")).await.unwrap();

        store.delete_record(&gone.id).await.unwrap();
        let after_once = store.snapshot().clone();
        store.delete_record(&gone.id).await.unwrap();

        assert_eq!(store.snapshot(), &after_once);
        assert_eq!(store.records(), std::slice::from_ref(&keep));
        assert_eq!(reopen(&backend).await.snapshot(), &after_once);
    }

    #[tokio::test]
    async fn test_units_change_leaves_records_untouched() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;
        store.add_record(fill_up("2024-01-01", "Shell")).await.unwrap();
        let before = store.records().to_vec();

        let mut profile = store.profile().clone();
        profile.units = Units::Imperial;
        store.update_profile(profile.clone()).await.unwrap();

        assert_eq!(store.records(), before.as_slice());
        let reloaded = reopen(&backend).await;
        assert_eq!(reloaded.profile(), &profile);
        assert_eq!(reloaded.records(), before.as_slice());
    }

    #[tokio::test]
    async fn test_malformed_records_slot_recovers() {
        let profile = VehicleProfile {
            make: "Volvo".to_string(),
            ..VehicleProfile::with_defaults()
        };
        let backend = Arc::new(MemoryStore::with_slot(SnapshotSlot::Records, b"[{oops"));
        backend.slots.lock().unwrap().insert(
            SnapshotSlot::Vehicle,
            serde_json::to_vec(&profile).unwrap(),
        );

        let (store, report) = RecordStore::open(backend).await.unwrap();

        assert_eq!(report.recovered, vec![SnapshotSlot::Records]);
        assert!(store.is_empty());
        assert_eq!(store.profile(), &profile);
    }

    #[tokio::test]
    async fn test_malformed_profile_slot_recovers() {
        let backend = Arc::new(MemoryStore::with_slot(SnapshotSlot::Vehicle, b"\"nope\""));

        let (store, report) = RecordStore::open(backend).await.unwrap();

        assert_eq!(report.recovered, vec![SnapshotSlot::Vehicle]);
        assert_eq!(store.profile(), &VehicleProfile::with_defaults());
    }

    #[tokio::test]
    async fn test_backend_read_failure_is_an_error() {
        let mut mock = MockSnapshotStore::new();
        mock.expect_read()
            .returning(|_| Err(RepositoryError::Storage("disk gone".to_string())));

        let result = RecordStore::open(Arc::new(mock)).await;
        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::Storage(_)))
        ));
    }

    #[tokio::test]
    async fn test_failed_commit_leaves_state_unchanged() {
        let mut mock = MockSnapshotStore::new();
        mock.expect_read().returning(|_| Ok(None));
        mock.expect_commit()
            .times(1)
            .returning(|_| Err(RepositoryError::Storage("read-only".to_string())));

        let (mut store, _) = RecordStore::open(Arc::new(mock)).await.unwrap();
        let result = store.add_record(fill_up("2024-03-01", "Shell")).await;

        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_commit_writes_both_slots_together() {
        let mut mock = MockSnapshotStore::new();
        mock.expect_read().returning(|_| Ok(None));
        mock.expect_commit()
            .withf(|writes| {
                writes.len() == 2
                    && writes[0].0 == SnapshotSlot::Records
                    && writes[1].0 == SnapshotSlot::Vehicle
            })
            .times(1)
            .returning(|_| Ok(()));

        let (mut store, _) = RecordStore::open(Arc::new(mock)).await.unwrap();
        let profile = VehicleProfile {
            model: "Model Y".to_string(),
            ..VehicleProfile::with_defaults()
        };
        store.update_profile(profile).await.unwrap();

        assert_eq!(store.profile().model, "Model Y");
    }

    #[tokio::test]
    async fn test_search_filters_in_canonical_order() {
        let backend = Arc::new(MemoryStore::default());
        let mut store = reopen(&backend).await;
        store.add_record(fill_up("2024-01-01", "Shell")).await.unwrap();
        store.add_record(fill_up("2024-02-01", "BP")).await.unwrap();
        store.add_record(fill_up("2024-03-01", "shell express")).await.unwrap();

        let hits: Vec<&str> = store
            .search("SHELL")
            .iter()
            .map(|r| r.station.as_str())
            .collect();
        assert_eq!(hits, vec!["shell express", "Shell"]);
    }
}
