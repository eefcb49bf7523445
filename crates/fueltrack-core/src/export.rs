//! CSV export of the record history.

use std::io::Write;

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::domain::FuelRecord;

/// Column header row of the export.
pub const CSV_HEADER: [&str; 6] = ["Date", "Station", "Amount", "Cost", "Distance", "Notes"];

/// Errors raised while writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write `records` as CSV, one row per record in the given order.
///
/// The header, date and numbers are written bare. Station and notes are
/// always quoted (embedded quotes are doubled), even when they look numeric,
/// and numbers use their shortest form.
pub fn write_csv<W: Write>(records: &[FuelRecord], writer: W) -> Result<(), ExportError> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    out.write_record(CSV_HEADER)?;
    for record in records {
        out.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            quoted(&record.station),
            record.amount.to_string(),
            record.cost.to_string(),
            record.distance_driven.to_string(),
            quoted(record.notes.as_deref().unwrap_or_default()),
        ])?;
    }
    out.flush()?;
    Ok(())
}

fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Render `records` as a CSV string.
pub fn to_csv_string(records: &[FuelRecord]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Default file name for an export made on `today`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("fueltrack_export_{}.csv", today.format("%Y-%m-%d"))
}
