//! Vehicle profile subcommands.

use clap::Subcommand;

use fueltrack_core::{FuelType, Units, VehicleProfileUpdate};

/// Vehicle profile commands.
#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Show the current vehicle profile
    Show,
    /// Update one or more profile fields
    Set {
        #[arg(long)]
        make: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        /// Petrol, Diesel, Electric or Hybrid
        #[arg(long, value_parser = parse_fuel_type)]
        fuel_type: Option<FuelType>,
        /// Metric or Imperial (changes labels only, values are not converted)
        #[arg(long, value_parser = parse_units)]
        units: Option<Units>,
    },
}

impl ProfileCommand {
    /// The field changes requested by `profile set`, if any.
    pub fn into_update(self) -> Option<VehicleProfileUpdate> {
        match self {
            Self::Show => None,
            Self::Set {
                make,
                model,
                year,
                fuel_type,
                units,
            } => Some(VehicleProfileUpdate {
                make,
                model,
                year,
                fuel_type,
                units,
            }),
        }
    }
}

fn parse_fuel_type(s: &str) -> Result<FuelType, String> {
    FuelType::parse(s).ok_or_else(|| {
        let names: Vec<&str> = FuelType::ALL.iter().map(FuelType::as_str).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

fn parse_units(s: &str) -> Result<Units, String> {
    Units::parse(s).ok_or_else(|| "expected Metric or Imperial".to_string())
}
