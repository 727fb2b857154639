//! Unit systems, dimension fields and calculation results

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Unit system the dimensions are entered in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum UnitSystem {
    /// Meters, volumes in m³
    #[value(name = "meters", alias = "metric")]
    #[serde(rename = "meters", alias = "metric")]
    Metric,
    /// Feet, volumes in ft³
    #[default]
    #[value(name = "feet", alias = "imperial")]
    #[serde(rename = "feet", alias = "imperial")]
    Imperial,
}

impl UnitSystem {
    pub fn is_metric(self) -> bool {
        self == UnitSystem::Metric
    }

    /// The other unit system
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Display label ("Meters" / "Feet")
    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "Meters",
            UnitSystem::Imperial => "Feet",
        }
    }

    /// Volume unit suffix used in reports
    pub fn volume_suffix(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m³",
            UnitSystem::Imperial => "ft³",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "meters"),
            UnitSystem::Imperial => write!(f, "feet"),
        }
    }
}

/// One of the three excavation dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Length,
    Width,
    Height,
}

impl Field {
    /// Validation order
    pub const ALL: [Field; 3] = [Field::Length, Field::Width, Field::Height];

    pub fn label(self) -> &'static str {
        match self {
            Field::Length => "Length",
            Field::Width => "Width",
            Field::Height => "Height",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one successful calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Excavated volume, always in cubic meters
    pub total_volume_m3: f64,
    pub required_trips: u64,
    /// required_trips x cost per trip at calculation time
    pub total_cost: f64,
}
