//! Fuel record domain types.
//!
//! A record is one fill-up. Numeric fields carry whatever unit the profile
//! used at entry time; nothing here converts them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a fuel record.
///
/// Generated once at creation and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One fuel purchase event.
///
/// Field order matches the persisted snapshot layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    pub id: RecordId,
    /// Back-reference to the owning vehicle profile.
    #[serde(alias = "carId")]
    pub vehicle_id: String,
    pub date: NaiveDate,
    /// Fuel dispensed (litres or gallons).
    pub amount: f64,
    pub cost: f64,
    #[serde(default)]
    pub station: String,
    /// Distance since the previous fill-up (km or miles).
    pub distance_driven: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FuelRecord {
    /// Build a stored record from user input plus the store-assigned fields.
    #[must_use]
    pub fn from_new(id: RecordId, vehicle_id: impl Into<String>, new: NewFuelRecord) -> Self {
        Self {
            id,
            vehicle_id: vehicle_id.into(),
            date: new.date,
            amount: new.amount,
            cost: new.cost,
            station: new.station,
            distance_driven: new.distance_driven,
            notes: new.notes,
        }
    }

    /// Whether this record matches a free-text history search.
    ///
    /// An empty term matches everything. Otherwise the term matches when the
    /// station contains it (case-insensitive) or the ISO date contains it.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        self.station
            .to_lowercase()
            .contains(&term.to_lowercase())
            || self.date.format("%Y-%m-%d").to_string().contains(term)
    }
}

/// User input for a new record: every field except `id` and `vehicle_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFuelRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub cost: f64,
    pub station: String,
    pub distance_driven: f64,
    pub notes: Option<String>,
}

impl NewFuelRecord {
    /// Create input with the required fields; station empty, no notes.
    #[must_use]
    pub const fn new(date: NaiveDate, amount: f64, cost: f64, distance_driven: f64) -> Self {
        Self {
            date,
            amount,
            cost,
            station: String::new(),
            distance_driven,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_station(mut self, station: impl Into<String>) -> Self {
        self.station = station.into();
        self
    }

    /// Attach notes. Blank notes are stored as absent.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }
}

/// Sort records into canonical order: most recent date first.
///
/// The sort is stable, so records sharing a date keep their relative order.
pub fn sort_by_date_desc(records: &mut [FuelRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
