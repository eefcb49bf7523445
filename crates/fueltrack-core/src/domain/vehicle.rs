//! Vehicle profile domain types.
//!
//! The profile is a singleton: it is created with placeholder values on first
//! run and replaced wholesale afterwards. Its `units` field only selects
//! display labels; stored record values are never converted.

use serde::{Deserialize, Serialize};

/// Identifier of the single tracked vehicle.
pub const DEFAULT_VEHICLE_ID: &str = "main-car";

/// Fuel the vehicle runs on. Informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    /// All fuel types in display order.
    pub const ALL: [Self; 4] = [Self::Petrol, Self::Diesel, Self::Electric, Self::Hybrid];

    /// Parse a fuel type from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "petrol" | "gasoline" => Some(Self::Petrol),
            "diesel" => Some(Self::Diesel),
            "electric" => Some(Self::Electric),
            "hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }

    /// Convert fuel type to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Measurement system used to label amounts and distances.
///
/// Older snapshots stored the long labels (`"Metric (L/km)"`), which are
/// still accepted when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Units {
    #[default]
    #[serde(alias = "Metric (L/km)")]
    Metric,
    #[serde(alias = "Imperial (Gal/mi)")]
    Imperial,
}

impl Units {
    /// Parse a unit system from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" | "metric (l/km)" => Some(Self::Metric),
            "imperial" | "imperial (gal/mi)" => Some(Self::Imperial),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::Imperial => "Imperial",
        }
    }

    /// Human-readable name including the base units.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Metric => "Metric (L/km)",
            Self::Imperial => "Imperial (Gal/mi)",
        }
    }

    /// Display labels for this unit system.
    #[must_use]
    pub const fn labels(&self) -> UnitLabels {
        match self {
            Self::Metric => UnitLabels {
                fuel: "L",
                distance: "km",
                efficiency: "km/L",
            },
            Self::Imperial => UnitLabels {
                fuel: "gal",
                distance: "mi",
                efficiency: "MPG",
            },
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit labels shown next to numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitLabels {
    pub fuel: &'static str,
    pub distance: &'static str,
    pub efficiency: &'static str,
}

/// The tracked vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleProfile {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: FuelType,
    pub units: Units,
}

impl VehicleProfile {
    /// Placeholder profile used until the user edits it.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            id: DEFAULT_VEHICLE_ID.to_string(),
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2023,
            fuel_type: FuelType::Petrol,
            units: Units::Metric,
        }
    }

    /// "2023 Tesla Model 3"
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Merge a partial update into this profile, only updating fields that are Some.
    ///
    /// The id is never changed.
    pub fn merge(&mut self, update: &VehicleProfileUpdate) {
        if let Some(ref make) = update.make {
            self.make.clone_from(make);
        }
        if let Some(ref model) = update.model {
            self.model.clone_from(model);
        }
        if let Some(year) = update.year {
            self.year = year;
        }
        if let Some(fuel_type) = update.fuel_type {
            self.fuel_type = fuel_type;
        }
        if let Some(units) = update.units {
            self.units = units;
        }
    }
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Partial profile update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfileUpdate {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub fuel_type: Option<FuelType>,
    pub units: Option<Units>,
}

impl VehicleProfileUpdate {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.make.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.fuel_type.is_none()
            && self.units.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = VehicleProfile::with_defaults();
        assert_eq!(profile.id, DEFAULT_VEHICLE_ID);
        assert_eq!(profile.display_name(), "2023 Tesla Model 3");
        assert_eq!(profile.fuel_type, FuelType::Petrol);
        assert_eq!(profile.units, Units::Metric);
    }

    #[test]
    fn test_merge_only_touches_set_fields() {
        let mut profile = VehicleProfile::with_defaults();
        profile.merge(&VehicleProfileUpdate {
            units: Some(Units::Imperial),
            year: Some(2019),
            ..Default::default()
        });

        assert_eq!(profile.units, Units::Imperial);
        assert_eq!(profile.year, 2019);
        assert_eq!(profile.make, "Tesla");
        assert_eq!(profile.id, DEFAULT_VEHICLE_ID);
    }

    #[test]
    fn test_units_labels() {
        assert_eq!(Units::Metric.labels().efficiency, "km/L");
        assert_eq!(Units::Imperial.labels().efficiency, "MPG");
        assert_eq!(Units::Imperial.labels().distance, "mi");
    }

    #[test]
    fn test_parse_round_trips_display() {
        for fuel in FuelType::ALL {
            assert_eq!(FuelType::parse(fuel.as_str()), Some(fuel));
        }
        assert_eq!(Units::parse("IMPERIAL"), Some(Units::Imperial));
        assert_eq!(Units::parse("Metric (L/km)"), Some(Units::Metric));
        assert_eq!(Units::parse("furlongs"), None);
    }

    #[test]
    fn test_legacy_units_label_deserializes() {
        let json = r#"{"id":"main-car","make":"Mazda","model":"3","year":2015,"fuelType":"Diesel","units":"Imperial (Gal/mi)"}"#;
        let profile: VehicleProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.units, Units::Imperial);
        assert_eq!(profile.fuel_type, FuelType::Diesel);
    }
}
