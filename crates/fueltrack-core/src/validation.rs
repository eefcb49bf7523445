//! Input validation for record entry.
//!
//! The record store assumes well-formed numbers. Entry points (forms, CLI)
//! run these checks before calling into the store.

use crate::domain::NewFuelRecord;

/// Record input validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordInputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Validate the numeric fields of a new record.
///
/// Amount, cost and distance must all be finite and strictly positive.
pub fn validate_new_record(input: &NewFuelRecord) -> Result<(), RecordInputError> {
    check_positive("amount", input.amount)?;
    check_positive("cost", input.cost)?;
    check_positive("distance", input.distance_driven)?;
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), RecordInputError> {
    if !value.is_finite() {
        return Err(RecordInputError::NotFinite { field, value });
    }
    if value <= 0.0 {
        return Err(RecordInputError::NotPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn input(amount: f64, cost: f64, distance: f64) -> NewFuelRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        NewFuelRecord::new(date, amount, cost, distance)
    }

    #[test]
    fn test_accepts_positive_values() {
        assert!(validate_new_record(&input(40.0, 60.0, 500.0)).is_ok());
    }

    #[test]
    fn test_rejects_zero_amount() {
        let err = validate_new_record(&input(0.0, 60.0, 500.0)).unwrap_err();
        assert_eq!(
            err,
            RecordInputError::NotPositive {
                field: "amount",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_rejects_nan_distance() {
        let err = validate_new_record(&input(40.0, 60.0, f64::NAN)).unwrap_err();
        assert!(matches!(
            err,
            RecordInputError::NotFinite {
                field: "distance",
                ..
            }
        ));
    }
}
