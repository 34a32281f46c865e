//! Reading models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of one `read_all` pass, keyed by sensor id
pub type Readings = HashMap<String, SensorValue>;

/// An annotated sensor reading
///
/// `value` is absent when the vendor could not produce a number. A present
/// value is reported even when it is out of range, with `valid` cleared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorValue {
    /// Raw value from the vendor (`null` on read failure)
    pub value: Option<f64>,
    /// Whether the value lies within the bounds for the sensor type
    pub valid: bool,
    /// Unit of measurement (e.g., "°C", "km/h", "%")
    pub unit: String,
}

impl SensorValue {
    /// A value the vendor produced
    pub fn reading(value: f64, valid: bool, unit: impl Into<String>) -> Self {
        Self {
            value: Some(value),
            valid,
            unit: unit.into(),
        }
    }

    /// A read that failed before any value was produced
    pub fn failed(unit: impl Into<String>) -> Self {
        Self {
            value: None,
            valid: false,
            unit: unit.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.value.is_none()
    }
}
