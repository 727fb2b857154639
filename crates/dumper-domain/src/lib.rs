//! Domain models and services for dumper trip calculation

pub mod model;
pub mod service;

pub use model::*;
