//! Calculator session: the caller-owned state around the pure calculator
//!
//! State machine: `Idle` -> calculate -> `Calculated` (or back to `Idle`
//! with field errors), and `Calculated` -> reset -> `Idle`. Unit and
//! setting changes never change the state.

use dumper_types::{CalculationResult, Field, UnitSystem, ValidationError, ValidationErrors};

use super::trip_calculator::{self, parse_cost, parse_positive_real, validate_field};
use crate::model::{DimensionInput, TripSettings, DEFAULT_DUMPER_CAPACITY_M3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    Idle,
    Calculated(CalculationResult),
}

#[derive(Debug, Clone)]
pub struct CalculatorSession {
    input: DimensionInput,
    errors: [Option<ValidationError>; 3],
    unit: UnitSystem,
    dumper_capacity_m3: f64,
    cost_per_trip: String,
    state: SessionState,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(UnitSystem::default(), DEFAULT_DUMPER_CAPACITY_M3, "3500")
    }
}

fn slot(field: Field) -> usize {
    match field {
        Field::Length => 0,
        Field::Width => 1,
        Field::Height => 2,
    }
}

impl CalculatorSession {
    pub fn new(unit: UnitSystem, dumper_capacity_m3: f64, cost_per_trip: impl Into<String>) -> Self {
        Self {
            input: DimensionInput::default(),
            errors: [None; 3],
            unit,
            dumper_capacity_m3,
            cost_per_trip: cost_per_trip.into(),
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        match &self.state {
            SessionState::Calculated(result) => Some(result),
            SessionState::Idle => None,
        }
    }

    pub fn input(&self) -> &DimensionInput {
        &self.input
    }

    pub fn unit(&self) -> UnitSystem {
        self.unit
    }

    pub fn dumper_capacity_m3(&self) -> f64 {
        self.dumper_capacity_m3
    }

    pub fn cost_per_trip_text(&self) -> &str {
        &self.cost_per_trip
    }

    /// Current live error for a field
    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors[slot(field)].as_ref()
    }

    /// All current field errors, in field order
    pub fn errors(&self) -> ValidationErrors {
        self.errors.iter().flatten().copied().collect()
    }

    /// Store field text and re-validate that field only.
    pub fn set_field(&mut self, field: Field, text: impl Into<String>) -> Option<&ValidationError> {
        self.input.set(field, text);
        self.errors[slot(field)] = validate_field(self.input.get(field), field);
        self.error(field)
    }

    pub fn set_unit(&mut self, unit: UnitSystem) {
        self.unit = unit;
    }

    pub fn toggle_unit(&mut self) -> UnitSystem {
        self.unit = self.unit.toggled();
        self.unit
    }

    /// Accept a new capacity if it is a finite positive number; otherwise
    /// keep the previous one. Returns whether the value was accepted.
    pub fn set_capacity_text(&mut self, text: &str) -> bool {
        match parse_positive_real(text) {
            Ok(capacity) => {
                self.dumper_capacity_m3 = capacity;
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_cost_text(&mut self, text: impl Into<String>) {
        self.cost_per_trip = text.into();
    }

    /// Settings as they stand right now
    pub fn settings(&self) -> TripSettings {
        TripSettings {
            dumper_capacity_m3: self.dumper_capacity_m3,
            cost_per_trip: parse_cost(&self.cost_per_trip),
        }
    }

    /// Validate every field and compute. On failure the session returns to
    /// `Idle` and every field carries its error.
    pub fn calculate(&mut self) -> Result<CalculationResult, ValidationErrors> {
        for field in Field::ALL {
            self.errors[slot(field)] = validate_field(self.input.get(field), field);
        }
        match trip_calculator::calculate(&self.input, self.unit, &self.settings()) {
            Ok(result) => {
                self.state = SessionState::Calculated(result);
                Ok(result)
            }
            Err(errors) => {
                self.state = SessionState::Idle;
                Err(errors)
            }
        }
    }

    /// Clear inputs and errors and discard the result. Unit and settings stay.
    pub fn reset(&mut self) {
        self.input.clear();
        self.errors = [None; 3];
        self.state = SessionState::Idle;
    }

    /// Stored volume in the unit currently selected
    pub fn display_volume(&self) -> Option<f64> {
        self.result()
            .map(|r| trip_calculator::display_volume(r.total_volume_m3, self.unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dumper_types::ValidationErrorKind;

    fn filled(unit: UnitSystem) -> CalculatorSession {
        let mut session = CalculatorSession::new(unit, 16.0, "3500");
        session.set_field(Field::Length, "2");
        session.set_field(Field::Width, "3");
        session.set_field(Field::Height, "4");
        session
    }

    #[test]
    fn test_defaults() {
        let session = CalculatorSession::default();
        assert_eq!(session.unit(), UnitSystem::Imperial);
        assert!((session.dumper_capacity_m3() - 16.0).abs() < f64::EPSILON);
        assert_eq!(session.cost_per_trip_text(), "3500");
        assert_eq!(session.state(), &SessionState::Idle);
    }

    #[test]
    fn test_live_validation_per_field() {
        let mut session = CalculatorSession::default();
        let err = session.set_field(Field::Length, "abc").copied();
        assert_eq!(err.map(|e| e.kind), Some(ValidationErrorKind::NotANumber));
        // untouched fields have no error yet
        assert!(session.error(Field::Width).is_none());
        assert!(session.set_field(Field::Length, "5").is_none());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_calculate_transitions_to_calculated() {
        let mut session = filled(UnitSystem::Metric);
        let result = session.calculate().unwrap();
        assert_eq!(result.required_trips, 2);
        assert!((result.total_cost - 7000.0).abs() < 1e-9);
        assert_eq!(session.state(), &SessionState::Calculated(result));
    }

    #[test]
    fn test_invalid_calculate_stays_idle_with_all_errors() {
        let mut session = CalculatorSession::default();
        session.set_field(Field::Width, "3");
        let errors = session.calculate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(
            session.error(Field::Length).map(|e| e.kind),
            Some(ValidationErrorKind::Missing)
        );
        assert_eq!(
            session.error(Field::Height).map(|e| e.kind),
            Some(ValidationErrorKind::Missing)
        );
        assert!(session.error(Field::Width).is_none());
    }

    #[test]
    fn test_failed_recalculation_discards_result() {
        let mut session = filled(UnitSystem::Metric);
        session.calculate().unwrap();
        session.set_field(Field::Height, "0");
        assert!(session.calculate().is_err());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_reset_clears_inputs_and_result() {
        let mut session = filled(UnitSystem::Metric);
        session.set_capacity_text("10");
        session.calculate().unwrap();
        session.reset();
        assert_eq!(session.state(), &SessionState::Idle);
        assert_eq!(session.input(), &DimensionInput::default());
        assert!(session.errors().is_empty());
        // settings and unit survive a reset
        assert_eq!(session.unit(), UnitSystem::Metric);
        assert!((session.dumper_capacity_m3() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_toggle_after_calculation_changes_display_only() {
        let mut session = filled(UnitSystem::Imperial);
        let result = session.calculate().unwrap();
        assert!((session.display_volume().unwrap() - 24.0).abs() < 1e-4);

        session.toggle_unit();
        assert!((session.display_volume().unwrap() - 0.6796032).abs() < 1e-9);
        assert_eq!(session.result(), Some(&result));
    }

    #[test]
    fn test_settings_change_does_not_touch_stored_result() {
        let mut session = filled(UnitSystem::Metric);
        session.calculate().unwrap();
        session.set_cost_text("1000");
        session.set_capacity_text("8");
        let result = session.result().unwrap();
        assert_eq!(result.required_trips, 2);
        assert!((result.total_cost - 7000.0).abs() < 1e-9);

        // taken fresh on the next calculation
        let result = session.calculate().unwrap();
        assert_eq!(result.required_trips, 3);
        assert!((result.total_cost - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn test_capacity_keeps_previous_on_bad_text() {
        let mut session = CalculatorSession::default();
        assert!(!session.set_capacity_text("abc"));
        assert!(!session.set_capacity_text("0"));
        assert!(!session.set_capacity_text("-4"));
        assert!((session.dumper_capacity_m3() - 16.0).abs() < f64::EPSILON);
        assert!(session.set_capacity_text("12.5"));
        assert!((session.dumper_capacity_m3() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_cost_is_zero() {
        let mut session = filled(UnitSystem::Metric);
        session.set_cost_text("free");
        let result = session.calculate().unwrap();
        assert!((result.total_cost - 0.0).abs() < f64::EPSILON);
    }
}
