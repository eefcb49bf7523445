//! Add command handler.
//!
//! Records a new fill-up. The date defaults to today when not given.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use fueltrack_core::{NewFuelRecord, validate_new_record};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_record_summary;

/// Arguments for the add command.
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub amount: f64,
    pub cost: f64,
    pub distance: f64,
    pub date: Option<NaiveDate>,
    pub station: Option<String>,
    pub notes: Option<String>,
}

impl AddArgs {
    /// Build store input, filling in today's date if none was given.
    pub fn into_input(self, today: NaiveDate) -> NewFuelRecord {
        let mut input = NewFuelRecord::new(
            self.date.unwrap_or(today),
            self.amount,
            self.cost,
            self.distance,
        );
        if let Some(station) = self.station {
            input = input.with_station(station.trim());
        }
        if let Some(notes) = self.notes {
            input = input.with_notes(notes);
        }
        input
    }
}

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if a numeric field is not a positive number or the
/// snapshot cannot be written.
pub async fn execute(ctx: &mut CliContext, args: AddArgs) -> Result<()> {
    let input = args.into_input(Local::now().date_naive());
    validate_new_record(&input).map_err(CliError::from)?;

    let record = ctx
        .store_mut()
        .add_record(input)
        .await
        .map_err(CliError::from)?;

    println!("Added fill-up:\n");
    display_record_summary(&record, &ctx.store().profile().units.labels());
    Ok(())
}
