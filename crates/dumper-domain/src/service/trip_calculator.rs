//! Volume, trip and cost calculation
//!
//! Pure functions over the raw field text and the current settings.
//! Nothing here holds state; see [`super::session`] for the caller-side
//! state holder.
//!
//! # Formula
//! volume_m3 = length x width x height (x 0.0283168 when entered in feet)
//! trips     = ceil(volume_m3 / dumper_capacity_m3)
//! cost      = trips x cost_per_trip

use dumper_types::{
    CalculationResult, Field, UnitSystem, ValidationError, ValidationErrorKind, ValidationErrors,
};

use crate::model::{DimensionInput, TripSettings};

/// Cubic feet to cubic meters. Also used in reverse for display.
pub const CUBIC_FEET_TO_CUBIC_METERS: f64 = 0.0283168;

/// Parse a dimension as a finite real number greater than zero.
///
/// Text is not trimmed, so whitespace-only input is `NotANumber`.
pub fn parse_positive_real(text: &str) -> Result<f64, ValidationErrorKind> {
    if text.is_empty() {
        return Err(ValidationErrorKind::Missing);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| ValidationErrorKind::NotANumber)?;
    if !value.is_finite() {
        return Err(ValidationErrorKind::NotANumber);
    }
    if value <= 0.0 {
        return Err(ValidationErrorKind::NotPositive);
    }
    Ok(value)
}

/// Cost per trip from free text. Unparseable text counts as 0.
pub fn parse_cost(text: &str) -> f64 {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

pub fn validate_field(value: &str, field: Field) -> Option<ValidationError> {
    parse_positive_real(value)
        .err()
        .map(|kind| ValidationError::new(field, kind))
}

/// Validate all three dimensions. Every field is checked even after a failure.
pub fn validate_all(length: &str, width: &str, height: &str) -> ValidationErrors {
    parse_dimensions(length, width, height).err().unwrap_or_default()
}

/// Parse length, width and height, collecting an error for every bad field.
fn parse_dimensions(length: &str, width: &str, height: &str) -> Result<[f64; 3], ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut values = [0.0_f64; 3];
    for ((slot, value), field) in values.iter_mut().zip([length, width, height]).zip(Field::ALL) {
        match parse_positive_real(value) {
            Ok(v) => *slot = v,
            Err(kind) => errors.push(ValidationError::new(field, kind)),
        }
    }
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// Excavated volume in cubic meters
pub fn compute_volume(length: f64, width: f64, height: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Metric => length * width * height,
        UnitSystem::Imperial => length * width * height * CUBIC_FEET_TO_CUBIC_METERS,
    }
}

/// Trips needed to haul the volume. `dumper_capacity_m3` must be positive.
///
/// Dimensions large enough to overflow the volume to infinity saturate at
/// `u64::MAX` trips.
pub fn compute_trips(total_volume_m3: f64, dumper_capacity_m3: f64) -> u64 {
    (total_volume_m3 / dumper_capacity_m3).ceil() as u64
}

pub fn compute_cost(required_trips: u64, cost_per_trip: f64) -> f64 {
    required_trips as f64 * cost_per_trip
}

/// Stored volume converted to the unit currently shown
pub fn display_volume(total_volume_m3: f64, unit: UnitSystem) -> f64 {
    match unit {
        UnitSystem::Metric => total_volume_m3,
        UnitSystem::Imperial => total_volume_m3 / CUBIC_FEET_TO_CUBIC_METERS,
    }
}

/// Validate the input and compute the result.
///
/// Returns the complete error set when any field is invalid; no partial
/// result is ever produced.
pub fn calculate(
    input: &DimensionInput,
    unit: UnitSystem,
    settings: &TripSettings,
) -> Result<CalculationResult, ValidationErrors> {
    let [length, width, height] = parse_dimensions(&input.length, &input.width, &input.height)?;
    let total_volume_m3 = compute_volume(length, width, height, unit);
    let required_trips = compute_trips(total_volume_m3, settings.dumper_capacity_m3);
    let total_cost = compute_cost(required_trips, settings.cost_per_trip);

    Ok(CalculationResult {
        total_volume_m3,
        required_trips,
        total_cost,
    })
}
