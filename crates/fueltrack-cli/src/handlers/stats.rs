//! Stats command handler.
//!
//! Prints the dashboard: totals, the recent efficiency trend and station
//! usage, labelled in the profile's units.

use anyhow::Result;
use serde_json::json;

use fueltrack_core::{recent_trend, station_breakdown};

use crate::bootstrap::CliContext;
use crate::presentation::{format_number, format_station, print_separator, truncate_string};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn execute(
    ctx: &CliContext,
    trend_points: usize,
    station_limit: usize,
    as_json: bool,
) -> Result<()> {
    let store = ctx.store();
    let dashboard = store.dashboard();
    let trend = recent_trend(store.records(), trend_points);
    let stations = station_breakdown(store.records(), station_limit);

    if as_json {
        let value = json!({
            "vehicle": store.profile(),
            "dashboard": dashboard,
            "trend": trend,
            "stations": stations,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let labels = dashboard.labels;
    let totals = dashboard.totals;

    println!(
        "{} - {} fill-up(s)\n",
        store.profile().display_name(),
        dashboard.record_count
    );
    println!("Total fuel:     {}", format_number(totals.total_fuel, 2, labels.fuel));
    println!("Total cost:     {}", format_number(totals.total_cost, 2, ""));
    println!(
        "Total distance: {}",
        format_number(totals.total_distance, 1, labels.distance)
    );
    println!(
        "Avg economy:    {}",
        format_number(totals.avg_efficiency, 2, labels.efficiency)
    );

    if trend.is_empty() {
        return Ok(());
    }

    println!("\nRecent trend (oldest first):");
    println!(
        "{:<8}  {:>10}  {:>9}  {:>10}",
        "Date", labels.efficiency, "Cost", labels.fuel
    );
    print_separator(44);
    for point in &trend {
        println!(
            "{:<8}  {:>10.2}  {:>9.2}  {:>10.2}",
            point.label, point.efficiency, point.cost, point.amount
        );
    }

    println!("\nStations:");
    print_separator(44);
    for usage in &stations {
        println!(
            "{:<24}  {:>4}  {:>6.1}%",
            truncate_string(format_station(&usage.station), 24),
            usage.count,
            usage.percentage
        );
    }

    Ok(())
}
