//! Configuration management for the dumper trip calculator
//!
//! Config stored at: ~/.config/dumper-trip-calculator/config.json

use dumper_domain::service::parse_cost;
use dumper_domain::TripSettings;
use dumper_types::{ConfigError, OutputFormat, Result, UnitSystem};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Volume one dumper trip carries, in cubic meters
    #[serde(default = "default_capacity")]
    pub dumper_capacity_m3: f64,

    /// Cost per trip as free text; unparseable text counts as 0
    #[serde(default = "default_cost_per_trip")]
    pub cost_per_trip: String,

    /// Unit system dimensions are entered in
    #[serde(default)]
    pub unit_system: UnitSystem,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Currency symbol prefixed to costs
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_capacity() -> f64 {
    dumper_domain::DEFAULT_DUMPER_CAPACITY_M3
}

fn default_cost_per_trip() -> String {
    "3500".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dumper_capacity_m3: default_capacity(),
            cost_per_trip: default_cost_per_trip(),
            unit_system: UnitSystem::default(),
            output_format: default_output_format(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("dumper-trip-calculator");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from a file, or defaults if the file does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Capacity must be a finite positive volume
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !self.dumper_capacity_m3.is_finite() || self.dumper_capacity_m3 <= 0.0 {
            return Err(ConfigError::InvalidCapacity(self.dumper_capacity_m3));
        }
        Ok(())
    }

    pub fn trip_settings(&self) -> TripSettings {
        TripSettings {
            dumper_capacity_m3: self.dumper_capacity_m3,
            cost_per_trip: parse_cost(&self.cost_per_trip),
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dumper Trip Calculator Configuration")?;
        writeln!(f, "====================================")?;
        writeln!(f)?;
        writeln!(f, "Dumper capacity: {:.2} m³", self.dumper_capacity_m3)?;
        writeln!(
            f,
            "Cost per trip:   {}{:.2} (\"{}\")",
            self.currency_symbol,
            parse_cost(&self.cost_per_trip),
            self.cost_per_trip
        )?;
        writeln!(f, "Unit:            {}", self.unit_system.label())?;
        writeln!(f, "Output format:   {}", self.output_format)?;
        writeln!(f, "Currency:        {}", self.currency_symbol)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dumper_types::Error;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!((config.dumper_capacity_m3 - 16.0).abs() < f64::EPSILON);
        assert_eq!(config.cost_per_trip, "3500");
        assert_eq!(config.unit_system, UnitSystem::Imperial);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            dumper_capacity_m3: 10.0,
            cost_per_trip: "1200".to_string(),
            unit_system: UnitSystem::Metric,
            output_format: OutputFormat::Json,
            currency_symbol: "$".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "unit_system": "meters" }"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.unit_system, UnitSystem::Metric);
        assert!((config.dumper_capacity_m3 - 16.0).abs() < f64::EPSILON);
        assert_eq!(config.cost_per_trip, "3500");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_non_positive_capacity_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "dumper_capacity_m3": 0.0 }"#).unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidCapacity(_))));

        let config = Config {
            dumper_capacity_m3: -1.0,
            ..Config::default()
        };
        assert!(config.save_to(&path).is_err());
    }

    #[test]
    fn test_trip_settings_parses_cost() {
        let mut config = Config::default();
        let settings = config.trip_settings();
        assert!((settings.cost_per_trip - 3500.0).abs() < f64::EPSILON);

        config.cost_per_trip = "n/a".to_string();
        assert!((config.trip_settings().cost_per_trip - 0.0).abs() < f64::EPSILON);
    }
}
