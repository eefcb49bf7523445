//! Test fixtures for creating record input.

#![allow(dead_code)]

use chrono::NaiveDate;
use fueltrack_core::NewFuelRecord;

/// Parse a `YYYY-MM-DD` date.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A fill-up with the given amount and distance; cost is 1.5 per unit.
pub fn fill_up(day: &str, amount: f64, distance: f64, station: &str) -> NewFuelRecord {
    NewFuelRecord::new(date(day), amount, amount * 1.5, distance).with_station(station)
}
