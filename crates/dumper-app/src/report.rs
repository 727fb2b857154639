//! Presentation model for calculation results and validation failures

use dumper_domain::service::display_volume;
use dumper_types::{CalculationResult, Field, UnitSystem, ValidationErrorKind, ValidationErrors};
use serde::Serialize;

/// Everything a front end shows after a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub unit: UnitSystem,
    pub required_trips: u64,
    pub total_cost: f64,
    pub currency_symbol: String,
    pub total_volume_m3: f64,
    /// Volume in the selected unit
    pub display_volume: f64,
    pub volume_unit: String,
}

impl TripReport {
    pub fn new(result: &CalculationResult, unit: UnitSystem, currency_symbol: &str) -> Self {
        Self {
            unit,
            required_trips: result.required_trips,
            total_cost: result.total_cost,
            currency_symbol: currency_symbol.to_string(),
            total_volume_m3: result.total_volume_m3,
            display_volume: display_volume(result.total_volume_m3, unit),
            volume_unit: unit.volume_suffix().to_string(),
        }
    }

    /// e.g. "Total Cost: ₹7000.00"
    pub fn cost_line(&self) -> String {
        format!("Total Cost: {}{:.2}", self.currency_symbol, self.total_cost)
    }

    /// e.g. "Total Volume: 24.00 m³"
    pub fn volume_line(&self) -> String {
        format!("Total Volume: {:.2} {}", self.display_volume, self.volume_unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldErrorEntry {
    pub field: Field,
    pub kind: ValidationErrorKind,
    pub message: String,
}

/// Machine-readable list of field errors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub errors: Vec<FieldErrorEntry>,
}

impl From<&ValidationErrors> for ErrorReport {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            errors: errors
                .iter()
                .map(|e| FieldErrorEntry {
                    field: e.field,
                    kind: e.kind,
                    message: e.message(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dumper_types::ValidationError;

    fn result() -> CalculationResult {
        CalculationResult {
            total_volume_m3: 24.0,
            required_trips: 2,
            total_cost: 7000.0,
        }
    }

    #[test]
    fn test_metric_lines() {
        let report = TripReport::new(&result(), UnitSystem::Metric, "₹");
        assert_eq!(report.cost_line(), "Total Cost: ₹7000.00");
        assert_eq!(report.volume_line(), "Total Volume: 24.00 m³");
    }

    #[test]
    fn test_imperial_volume_is_converted_for_display() {
        let report = TripReport::new(&result(), UnitSystem::Imperial, "$");
        assert!((report.display_volume - 24.0 / 0.0283168).abs() < 1e-6);
        assert_eq!(report.volume_unit, "ft³");
        assert!((report.total_volume_m3 - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_json_shape() {
        let report = TripReport::new(&result(), UnitSystem::Metric, "₹");
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["unit"], "meters");
        assert_eq!(json["required_trips"], 2);
        assert_eq!(json["volume_unit"], "m³");
    }

    #[test]
    fn test_error_report() {
        let errors: ValidationErrors = vec![ValidationError::new(
            Field::Length,
            ValidationErrorKind::NotPositive,
        )]
        .into_iter()
        .collect();
        let json = serde_json::to_value(ErrorReport::from(&errors)).unwrap();
        assert_eq!(json["errors"][0]["field"], "length");
        assert_eq!(json["errors"][0]["kind"], "not_positive");
        assert_eq!(json["errors"][0]["message"], "Length must be greater than 0");
    }
}
