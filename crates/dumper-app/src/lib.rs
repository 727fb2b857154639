//! Application layer - configuration and report presentation

pub mod config;
pub mod report;

pub use config::Config;
pub use report::{ErrorReport, TripReport};
