use serde::{Deserialize, Serialize};

pub const DEFAULT_DUMPER_CAPACITY_M3: f64 = 16.0;
pub const DEFAULT_COST_PER_TRIP: f64 = 3500.0;

/// Truck capacity and haulage price, read fresh on every calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripSettings {
    /// Volume one trip carries, in cubic meters. Expected to be positive.
    pub dumper_capacity_m3: f64,
    pub cost_per_trip: f64,
}

impl Default for TripSettings {
    fn default() -> Self {
        Self {
            dumper_capacity_m3: DEFAULT_DUMPER_CAPACITY_M3,
            cost_per_trip: DEFAULT_COST_PER_TRIP,
        }
    }
}
