//! Sensor identity models

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StationError;

/// Physical quantity a sensor measures
///
/// Names parse case-insensitively from their SCREAMING_SNAKE form
/// (`"TEMPERATURE"`, `"wind_speed"`); anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
pub enum SensorType {
    Temperature,
    WindSpeed,
    WindDirection,
    Humidity,
}

impl SensorType {
    /// Every sensor type, in declaration order
    pub const ALL: [SensorType; 4] = [
        SensorType::Temperature,
        SensorType::WindSpeed,
        SensorType::WindDirection,
        SensorType::Humidity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Temperature => "TEMPERATURE",
            SensorType::WindSpeed => "WIND_SPEED",
            SensorType::WindDirection => "WIND_DIRECTION",
            SensorType::Humidity => "HUMIDITY",
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorType {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        SensorType::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| StationError::UnknownSensorType(name.to_string()))
    }
}

impl TryFrom<String> for SensorType {
    type Error = StationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A registered sensor
///
/// Immutable once created; it lives as long as the registry holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    /// Key of the sensor in the result map
    pub id: String,
    /// What the sensor measures
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    /// Vendor-specific address of the device
    pub uri: String,
}

impl Sensor {
    pub fn new(id: impl Into<String>, sensor_type: SensorType, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sensor_type,
            uri: uri.into(),
        }
    }
}
