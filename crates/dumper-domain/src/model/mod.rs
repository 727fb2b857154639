//! Domain model types

pub mod dimensions;
pub mod settings;

pub use dimensions::DimensionInput;
pub use settings::{TripSettings, DEFAULT_COST_PER_TRIP, DEFAULT_DUMPER_CAPACITY_M3};
