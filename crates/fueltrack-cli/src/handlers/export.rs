//! Export command handler.
//!
//! Writes the full history as CSV, newest first.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{Local, NaiveDate};

use fueltrack_core::{export_file_name, write_csv};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Output path for an export, defaulting to a dated file in the current
/// directory.
pub fn output_path(output: Option<PathBuf>, today: NaiveDate) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(export_file_name(today)))
}

/// Write all records to `path` as CSV.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_to(ctx: &CliContext, path: &Path) -> Result<usize, CliError> {
    let records = ctx.store().records();
    let file = File::create(path)?;
    write_csv(records, BufWriter::new(file))?;
    Ok(records.len())
}

/// Execute the export command.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn execute(ctx: &CliContext, output: Option<PathBuf>) -> Result<()> {
    let path = output_path(output, Local::now().date_naive());
    let count = export_to(ctx, &path)?;
    println!("Exported {count} fill-up(s) to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::add::{self, AddArgs};
    use crate::handlers::test_support::json_context;
    use tempfile::tempdir;

    #[test]
    fn test_default_output_path() {
        let today = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        assert_eq!(
            output_path(None, today),
            PathBuf::from("fueltrack_export_2024-11-05.csv")
        );
        assert_eq!(
            output_path(Some(PathBuf::from("out.csv")), today),
            PathBuf::from("out.csv")
        );
    }

    #[tokio::test]
    async fn test_export_writes_header_and_rows() {
        let temp = tempdir().unwrap();
        let mut ctx = json_context(temp.path()).await;
        let args = AddArgs {
            amount: 40.0,
            cost: 60.0,
            distance: 500.0,
            station: Some("Shell".to_string()),
            ..AddArgs::default()
        };
        add::execute(&mut ctx, args).await.unwrap();

        let path = temp.path().join("history.csv");
        let count = export_to(&ctx, &path).unwrap();

        assert_eq!(count, 1);
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Date,Station,Amount,Cost,Distance,Notes"));
        assert!(lines.next().unwrap().contains("\"Shell\",40,60,500"));
    }
}
