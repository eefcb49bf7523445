//! Edit command handler.
//!
//! Changes selected fields of an existing fill-up. The record keeps its id
//! and is re-placed by date if the date changed.

use anyhow::Result;
use chrono::NaiveDate;

use fueltrack_core::{FuelRecord, NewFuelRecord, RecordId, validate_new_record};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_record_summary;

/// Arguments for the edit command. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditArgs {
    pub id: String,
    pub amount: Option<f64>,
    pub cost: Option<f64>,
    pub distance: Option<f64>,
    pub date: Option<NaiveDate>,
    pub station: Option<String>,
    pub notes: Option<String>,
}

impl EditArgs {
    /// True when no field would change.
    pub const fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.cost.is_none()
            && self.distance.is_none()
            && self.date.is_none()
            && self.station.is_none()
            && self.notes.is_none()
    }

    /// Apply the requested changes on top of `existing`.
    pub fn apply(&self, existing: &FuelRecord) -> Result<FuelRecord, CliError> {
        let mut input = NewFuelRecord {
            date: self.date.unwrap_or(existing.date),
            amount: self.amount.unwrap_or(existing.amount),
            cost: self.cost.unwrap_or(existing.cost),
            station: existing.station.clone(),
            distance_driven: self.distance.unwrap_or(existing.distance_driven),
            notes: existing.notes.clone(),
        };
        if let Some(station) = &self.station {
            input = input.with_station(station.trim());
        }
        if let Some(notes) = &self.notes {
            input = input.with_notes(notes.clone());
        }
        validate_new_record(&input)?;

        Ok(FuelRecord::from_new(
            existing.id.clone(),
            existing.vehicle_id.clone(),
            input,
        ))
    }
}

/// Execute the edit command.
///
/// # Errors
///
/// Returns an error if an edited value is invalid or the snapshot cannot be
/// written.
pub async fn execute(ctx: &mut CliContext, args: EditArgs) -> Result<()> {
    let id = RecordId::from(args.id.as_str());
    let Some(existing) = ctx.store().get(&id) else {
        println!("No fill-up found with id '{id}'.");
        println!("Use 'fueltrack list' to see recorded fill-ups.");
        return Ok(());
    };

    if args.is_empty() {
        println!("Nothing to change. Pass at least one field to edit.");
        return Ok(());
    }

    let updated = args.apply(existing)?;
    ctx.store_mut()
        .update_record(updated.clone())
        .await
        .map_err(CliError::from)?;

    println!("Updated fill-up:\n");
    display_record_summary(&updated, &ctx.store().profile().units.labels());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::add::{self, AddArgs};
    use crate::handlers::test_support::json_context;
    use tempfile::tempdir;

    fn existing() -> FuelRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        FuelRecord::from_new(
            RecordId::from("r1"),
            "main-car",
            NewFuelRecord::new(date, 40.0, 60.0, 500.0)
                .with_station("Shell")
                .with_notes("full tank"),
        )
    }

    #[test]
    fn test_apply_changes_only_given_fields() {
        let args = EditArgs {
            id: "r1".to_string(),
            cost: Some(65.5),
            notes: Some(String::new()),
            ..EditArgs::default()
        };

        let updated = args.apply(&existing()).unwrap();

        assert_eq!(updated.id.as_str(), "r1");
        assert!((updated.cost - 65.5).abs() < f64::EPSILON);
        assert!((updated.amount - 40.0).abs() < f64::EPSILON);
        assert_eq!(updated.station, "Shell");
        assert_eq!(updated.notes, None);
    }

    #[test]
    fn test_apply_rejects_invalid_value() {
        let args = EditArgs {
            id: "r1".to_string(),
            distance: Some(-1.0),
            ..EditArgs::default()
        };
        assert!(matches!(
            args.apply(&existing()),
            Err(CliError::Arguments(_))
        ));
    }

    #[tokio::test]
    async fn test_execute_moves_record_by_date() {
        let temp = tempdir().unwrap();
        let mut ctx = json_context(temp.path()).await;
        for day in [1, 10] {
            let args = AddArgs {
                amount: 10.0,
                cost: 15.0,
                distance: 100.0,
                date: NaiveDate::from_ymd_opt(2024, 3, day),
                ..AddArgs::default()
            };
            add::execute(&mut ctx, args).await.unwrap();
        }
        let older = ctx.store().records()[1].id.clone();

        let args = EditArgs {
            id: older.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 20),
            ..EditArgs::default()
        };
        execute(&mut ctx, args).await.unwrap();

        assert_eq!(ctx.store().records()[0].id, older);
    }
}
