//! Domain services

pub mod session;
pub mod trip_calculator;

pub use session::{CalculatorSession, SessionState};
pub use trip_calculator::{
    calculate, compute_cost, compute_trips, compute_volume, display_volume, parse_cost,
    parse_positive_real, validate_all, validate_field, CUBIC_FEET_TO_CUBIC_METERS,
};
