//! End-to-end calculation from a config file through to the report

use dumper_app::{Config, TripReport};
use dumper_domain::service::calculate;
use dumper_domain::DimensionInput;
use dumper_types::{Field, UnitSystem, ValidationErrorKind};
use tempfile::tempdir;

#[test]
fn test_config_drives_calculation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "dumper_capacity_m3": 10.0, "cost_per_trip": "2500", "unit_system": "meters" }"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let input = DimensionInput::new("5", "4", "3");
    let result = calculate(&input, config.unit_system, &config.trip_settings()).unwrap();

    // 60 m3 over 10 m3 loads
    assert_eq!(result.required_trips, 6);
    assert!((result.total_cost - 15000.0).abs() < 1e-9);

    let report = TripReport::new(&result, config.unit_system, &config.currency_symbol);
    assert_eq!(report.volume_line(), "Total Volume: 60.00 m³");
    assert_eq!(report.cost_line(), "Total Cost: ₹15000.00");
}

#[test]
fn test_feet_input_reported_in_feet() {
    let config = Config::default();
    let input = DimensionInput::new("20", "10", "5");
    let result = calculate(&input, UnitSystem::Imperial, &config.trip_settings()).unwrap();

    // 1000 ft3 = 28.3168 m3 -> 2 loads of 16 m3
    assert!((result.total_volume_m3 - 28.3168).abs() < 1e-9);
    assert_eq!(result.required_trips, 2);

    let report = TripReport::new(&result, UnitSystem::Imperial, &config.currency_symbol);
    assert!((report.display_volume - 1000.0).abs() < 1e-4);
    assert_eq!(report.volume_line(), "Total Volume: 1000.00 ft³");
}

#[test]
fn test_invalid_input_never_produces_a_result() {
    let config = Config::default();
    for (l, w, h) in [("", "1", "1"), ("1", "x", "1"), ("1", "1", "-2"), ("", "", "")] {
        let input = DimensionInput::new(l, w, h);
        let errors = calculate(&input, UnitSystem::Metric, &config.trip_settings()).unwrap_err();
        assert!(!errors.is_empty());
    }

    let input = DimensionInput::new("", "abc", "0");
    let errors = calculate(&input, UnitSystem::Metric, &config.trip_settings()).unwrap_err();
    let kinds: Vec<_> = errors.iter().map(|e| (e.field, e.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (Field::Length, ValidationErrorKind::Missing),
            (Field::Width, ValidationErrorKind::NotANumber),
            (Field::Height, ValidationErrorKind::NotPositive),
        ]
    );
}
