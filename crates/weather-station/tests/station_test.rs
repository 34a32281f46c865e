//! End-to-end tests for the weather station
//!
//! Exercises the full read path (registry → engine → vendor adapters) against
//! the mock vendors: a stateless one owning `a:` URIs and a session-based
//! one owning `b:` URIs.

use std::f64::consts::PI;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use weather_station::{
    Readings, SensorType, SensorValue, StationConfig, StationError, VendorClient, WeatherStation,
};
use weather_vendor::{DirectClient, MockDirectVendor, MockSessionVendor, SessionClient};

struct Harness {
    vendor_a: MockDirectVendor,
    vendor_b: MockSessionVendor,
    station: WeatherStation,
}

impl Harness {
    fn clients(vendor_a: &MockDirectVendor, vendor_b: &MockSessionVendor) -> Vec<Arc<dyn VendorClient>> {
        vec![
            Arc::new(DirectClient::new("vendor-a", vendor_a.clone())),
            Arc::new(SessionClient::new("vendor-b", vendor_b.clone())),
        ]
    }

    /// Set the raw value behind a URI on whichever vendor owns it
    fn set_value(&self, uri: &str, value: f64) {
        if uri.starts_with("a:") {
            self.vendor_a.set_value(uri, value);
        } else {
            self.vendor_b.set_value(uri, value);
        }
    }

    fn read_single(&self, id: &str) -> SensorValue {
        let readings = self.station.read_all().unwrap();
        assert_eq!(readings.len(), 1);
        readings[id].clone()
    }
}

#[fixture]
fn harness() -> Harness {
    let vendor_a = MockDirectVendor::new("a:");
    let vendor_b = MockSessionVendor::new("b:");
    let station = WeatherStation::new(Harness::clients(&vendor_a, &vendor_b));
    Harness {
        vendor_a,
        vendor_b,
        station,
    }
}

#[rstest]
fn validates_uri_when_adding_sensor(mut harness: Harness) {
    harness
        .station
        .register("id1", SensorType::Temperature, "a:test")
        .unwrap();
    harness
        .station
        .register("id2", SensorType::Temperature, "b:test")
        .unwrap();

    assert_eq!(
        harness
            .station
            .register("id3", SensorType::Temperature, "c:test"),
        Err(StationError::InvalidUri("c:test".to_string()))
    );

    harness.set_value("a:test", 20.0);
    harness.set_value("b:test", 21.0);
    let readings = harness.station.read_all().unwrap();
    assert_eq!(readings.len(), 2);
    assert!(!readings.contains_key("id3"));
}

#[rstest]
fn temperature_sensor(mut harness: Harness, #[values("a:test", "b:test")] uri: &str) {
    harness
        .station
        .register("id", SensorType::Temperature, uri)
        .unwrap();

    assert_eq!(harness.read_single("id"), SensorValue::failed("°C"));

    for (raw, valid) in [
        (27.3, true),
        (-274.0, false),
        (200.2, false),
        (-50.0, false),
        (-49.9999999, true),
        (150.0, true),
        (150.0000001, false),
    ] {
        harness.set_value(uri, raw);
        assert_eq!(
            harness.read_single("id"),
            SensorValue::reading(raw, valid, "°C"),
            "raw value {raw}"
        );
    }
}

#[rstest]
fn wind_speed_sensor(mut harness: Harness, #[values("a:test", "b:test")] uri: &str) {
    harness
        .station
        .register("id", SensorType::WindSpeed, uri)
        .unwrap();

    for (raw, valid) in [(27.3, true), (0.0, true), (-f64::from_bits(1), false)] {
        harness.set_value(uri, raw);
        assert_eq!(
            harness.read_single("id"),
            SensorValue::reading(raw, valid, "km/h"),
            "raw value {raw}"
        );
    }
}

#[rstest]
fn wind_direction_sensor(mut harness: Harness, #[values("a:test", "b:test")] uri: &str) {
    harness
        .station
        .register("id", SensorType::WindDirection, uri)
        .unwrap();

    let just_above_pi = PI + 0.0000001;
    for (raw, valid) in [
        (-PI, true),
        (PI, true),
        (just_above_pi, false),
        (-just_above_pi, false),
    ] {
        harness.set_value(uri, raw);
        assert_eq!(
            harness.read_single("id"),
            SensorValue::reading(raw, valid, ""),
            "raw value {raw}"
        );
    }
}

#[rstest]
fn humidity_sensor(mut harness: Harness, #[values("a:test", "b:test")] uri: &str) {
    harness
        .station
        .register("id", SensorType::Humidity, uri)
        .unwrap();

    for (raw, valid) in [(45.0, true), (100.1, false), (-0.1, false)] {
        harness.set_value(uri, raw);
        assert_eq!(
            harness.read_single("id"),
            SensorValue::reading(raw, valid, "%"),
            "raw value {raw}"
        );
    }
}

fn two_sensor_station(harness: &mut Harness) {
    harness
        .station
        .register("A", SensorType::Temperature, "a:test")
        .unwrap();
    harness
        .station
        .register("B", SensorType::Humidity, "b:test")
        .unwrap();
    harness.set_value("a:test", 27.3);
    harness.set_value("b:test", 56.0);
}

#[rstest]
fn multiple_sensors(mut harness: Harness) {
    two_sensor_station(&mut harness);

    let expected = Readings::from([
        ("A".to_string(), SensorValue::reading(27.3, true, "°C")),
        ("B".to_string(), SensorValue::reading(56.0, true, "%")),
    ]);
    assert_eq!(harness.station.read_all().unwrap(), expected);
}

#[rstest]
fn connect_failure_degrades_one_sensor(mut harness: Harness) {
    two_sensor_station(&mut harness);
    harness.vendor_b.set_fail_connect(true);

    let expected = Readings::from([
        ("A".to_string(), SensorValue::reading(27.3, true, "°C")),
        ("B".to_string(), SensorValue::failed("%")),
    ]);
    assert_eq!(harness.station.read_all().unwrap(), expected);

    harness.vendor_b.set_fail_connect(false);
    assert_eq!(
        harness.station.read_all().unwrap()["B"],
        SensorValue::reading(56.0, true, "%")
    );
}

#[rstest]
fn read_failure_degrades_one_sensor(mut harness: Harness) {
    two_sensor_station(&mut harness);
    harness.vendor_a.clear_value("a:test");

    let readings = harness.station.read_all().unwrap();
    assert_eq!(readings["A"], SensorValue::failed("°C"));
    assert_eq!(readings["B"], SensorValue::reading(56.0, true, "%"));
}

#[rstest]
fn sessions_released_across_passes(mut harness: Harness) {
    harness
        .station
        .register("ok", SensorType::Humidity, "b:ok")
        .unwrap();
    harness
        .station
        .register("broken", SensorType::Humidity, "b:broken")
        .unwrap();
    harness.set_value("b:ok", 40.0);

    for _ in 0..3 {
        harness.station.read_all().unwrap();
    }

    let stats = harness.vendor_b.stats();
    assert_eq!(stats.opened, 6);
    assert_eq!(stats.released, 6);
    assert_eq!(stats.live(), 0);
}

#[rstest]
fn duplicate_id_last_registration_wins(mut harness: Harness) {
    harness
        .station
        .register("X", SensorType::Temperature, "a:t")
        .unwrap();
    harness
        .station
        .register("X", SensorType::Humidity, "b:h")
        .unwrap();
    harness.set_value("a:t", 10.0);
    harness.set_value("b:h", 101.0);

    assert_eq!(harness.station.sensors().len(), 2);
    assert_eq!(harness.read_single("X"), SensorValue::reading(101.0, false, "%"));
}

#[rstest]
fn readings_serialize_to_json(mut harness: Harness) {
    two_sensor_station(&mut harness);
    harness.vendor_b.set_fail_connect(true);

    let json = serde_json::to_value(harness.station.read_all().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "A": {"value": 27.3, "valid": true, "unit": "°C"},
            "B": {"value": null, "valid": false, "unit": "%"},
        })
    );
}

#[test]
fn station_from_config() {
    let vendor_a = MockDirectVendor::new("a:");
    let vendor_b = MockSessionVendor::new("b:");
    vendor_a.set_value("a:roof/temp", 27.3);
    vendor_b.set_value("b:mast/vane", 1.2);

    let config = StationConfig::from_toml_str(
        r#"
name = "Rooftop"

[[sensors]]
id = "outside_temp"
type = "TEMPERATURE"
uri = "a:roof/temp"

[[sensors]]
id = "wind_dir"
type = "WIND_DIRECTION"
uri = "b:mast/vane"
"#,
    )
    .unwrap();

    let station =
        WeatherStation::from_config(&config, Harness::clients(&vendor_a, &vendor_b)).unwrap();
    let ids: Vec<_> = station.sensors().iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, vec!["outside_temp", "wind_dir"]);

    let readings = station.read_all().unwrap();
    assert_eq!(readings["outside_temp"], SensorValue::reading(27.3, true, "°C"));
    assert_eq!(readings["wind_dir"], SensorValue::reading(1.2, true, ""));
}

#[test]
fn station_from_config_rejects_unowned_uri() {
    let vendor_a = MockDirectVendor::new("a:");
    let vendor_b = MockSessionVendor::new("b:");
    let config = StationConfig::from_toml_str(
        r#"
[[sensors]]
id = "t"
type = "TEMPERATURE"
uri = "c:nowhere"
"#,
    )
    .unwrap();

    let result = WeatherStation::from_config(&config, Harness::clients(&vendor_a, &vendor_b));
    assert!(matches!(result, Err(StationError::InvalidUri(uri)) if uri == "c:nowhere"));
}

#[test]
fn station_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("station.toml");
    std::fs::write(
        &path,
        "[[sensors]]\nid = \"gust\"\ntype = \"WIND_SPEED\"\nuri = \"a:gust\"\n",
    )
    .unwrap();

    let vendor_a = MockDirectVendor::new("a:");
    let vendor_b = MockSessionVendor::new("b:");
    vendor_a.set_value("a:gust", 27.3);

    let station =
        WeatherStation::from_config_file(&path, Harness::clients(&vendor_a, &vendor_b)).unwrap();
    assert_eq!(
        station.read_all().unwrap()["gust"],
        SensorValue::reading(27.3, true, "km/h")
    );
}
