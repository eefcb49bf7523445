//! Rendering of fuel records for terminal output.

use fueltrack_core::{FuelRecord, UnitLabels, per_record_efficiency};

use super::tables::{format_number, print_separator, truncate_string};

/// Label shown for a record with no station.
pub const UNKNOWN_STATION: &str = "Unknown";

/// Station name for display, substituting a placeholder when empty.
pub fn format_station(station: &str) -> &str {
    if station.trim().is_empty() {
        UNKNOWN_STATION
    } else {
        station
    }
}

/// Print the column header for record tables.
pub fn print_record_header(labels: &UnitLabels) {
    println!(
        "{:<36}  {:<10}  {:<20}  {:>10}  {:>9}  {:>10}  {:>10}",
        "ID",
        "Date",
        "Station",
        format!("Fuel ({})", labels.fuel),
        "Cost",
        format!("Dist ({})", labels.distance),
        labels.efficiency,
    );
    print_separator(117);
}

/// One table row for a record.
pub fn format_record_row(record: &FuelRecord) -> String {
    format!(
        "{:<36}  {:<10}  {:<20}  {:>10.2}  {:>9.2}  {:>10.1}  {:>10.2}",
        record.id,
        record.date.format("%Y-%m-%d"),
        truncate_string(format_station(&record.station), 20),
        record.amount,
        record.cost,
        record.distance_driven,
        per_record_efficiency(record),
    )
}

/// Print a multi-line summary of a record, e.g. before removal.
pub fn display_record_summary(record: &FuelRecord, labels: &UnitLabels) {
    println!("Record:   {}", record.id);
    println!("Date:     {}", record.date.format("%Y-%m-%d"));
    println!("Station:  {}", format_station(&record.station));
    println!("Fuel:     {}", format_number(record.amount, 2, labels.fuel));
    println!("Cost:     {}", format_number(record.cost, 2, ""));
    println!(
        "Distance: {}",
        format_number(record.distance_driven, 1, labels.distance)
    );
    println!(
        "Economy:  {}",
        format_number(per_record_efficiency(record), 2, labels.efficiency)
    );
    if let Some(notes) = &record.notes {
        println!("Notes:    {notes}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fueltrack_core::{NewFuelRecord, RecordId};

    #[test]
    fn test_format_station_placeholder() {
        assert_eq!(format_station(""), "Unknown");
        assert_eq!(format_station("  "), "Unknown");
        assert_eq!(format_station("Shell"), "Shell");
    }

    #[test]
    fn test_format_record_row() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let record = FuelRecord::from_new(
            RecordId::from("r1"),
            "main-car",
            NewFuelRecord::new(date, 40.0, 60.0, 500.0),
        );

        let row = format_record_row(&record);
        assert!(row.starts_with("r1"));
        assert!(row.contains("2024-03-01"));
        assert!(row.contains("Unknown"));
        assert!(row.trim_end().ends_with("12.50"));
    }
}
