//! Statistics engine.
//!
//! Pure functions folding a record list into the figures shown on the
//! dashboard. Nothing here fails: degenerate input yields zeros or empty
//! output. Computation is unit-agnostic; labels come from the profile.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{FuelRecord, UnitLabels, VehicleProfile};

/// Number of points shown on the efficiency and cost trend charts.
pub const DEFAULT_TREND_POINTS: usize = 10;

/// Number of stations shown in the usage breakdown.
pub const DEFAULT_STATION_LIMIT: usize = 5;

/// Totals across a record collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_fuel: f64,
    pub total_cost: f64,
    pub total_distance: f64,
    /// Distance per unit of fuel over the whole history.
    pub avg_efficiency: f64,
}

/// One point on the trend charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Short date label, e.g. "Mar 1".
    pub label: String,
    pub date: NaiveDate,
    pub efficiency: f64,
    pub cost: f64,
    pub amount: f64,
}

/// Usage share of one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationUsage {
    /// Station label; empty when the record had none.
    pub station: String,
    pub count: usize,
    /// Share of all records, 0-100.
    pub percentage: f64,
}

/// Everything the dashboard header needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub totals: Totals,
    pub labels: UnitLabels,
    pub record_count: usize,
}

/// Sum fuel, cost and distance, and derive average efficiency.
///
/// Average efficiency is `total_distance / total_fuel`, or 0 when no fuel
/// was recorded.
pub fn aggregate_totals(records: &[FuelRecord]) -> Totals {
    let (total_fuel, total_cost, total_distance) =
        records
            .iter()
            .fold((0.0, 0.0, 0.0), |(fuel, cost, distance), r| {
                (fuel + r.amount, cost + r.cost, distance + r.distance_driven)
            });

    let avg_efficiency = if total_fuel > 0.0 {
        total_distance / total_fuel
    } else {
        0.0
    };

    Totals {
        total_fuel,
        total_cost,
        total_distance,
        avg_efficiency,
    }
}

/// Distance per unit of fuel for a single fill-up.
///
/// Returns 0 when `amount` is zero or the division is otherwise not finite.
pub fn per_record_efficiency(record: &FuelRecord) -> f64 {
    let efficiency = record.distance_driven / record.amount;
    if efficiency.is_finite() {
        efficiency
    } else {
        0.0
    }
}

/// The `n` most recent records as chart points, oldest first.
///
/// Expects `records` in canonical (date descending) order.
pub fn recent_trend(records: &[FuelRecord], n: usize) -> Vec<TrendPoint> {
    let take = n.min(records.len());
    records[..take]
        .iter()
        .rev()
        .map(|r| TrendPoint {
            label: r.date.format("%b %-d").to_string(),
            date: r.date,
            efficiency: per_record_efficiency(r),
            cost: r.cost,
            amount: r.amount,
        })
        .collect()
}

/// Record count and share per station, at most `limit` stations.
///
/// Stations appear in first-seen order over `records`; grouping is
/// case-sensitive and the empty station is its own group.
pub fn station_breakdown(records: &[FuelRecord], limit: usize) -> Vec<StationUsage> {
    let mut groups: Vec<(&str, usize)> = Vec::new();
    for record in records {
        match groups.iter().position(|(s, _)| *s == record.station) {
            Some(index) => groups[index].1 += 1,
            None => groups.push((record.station.as_str(), 1)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let total = records.len() as f64;

    groups
        .into_iter()
        .take(limit)
        .map(|(station, count)| {
            #[allow(clippy::cast_precision_loss)]
            let percentage = count as f64 / total * 100.0;
            StationUsage {
                station: station.to_string(),
                count,
                percentage,
            }
        })
        .collect()
}

/// Totals plus the profile's unit labels.
pub fn dashboard(records: &[FuelRecord], profile: &VehicleProfile) -> DashboardStats {
    DashboardStats {
        totals: aggregate_totals(records),
        labels: profile.units.labels(),
        record_count: records.len(),
    }
}
