//! Station configuration
//!
//! Sensors can be listed in a TOML file instead of registered by hand:
//!
//! ```toml
//! name = "Rooftop"
//!
//! [[sensors]]
//! id = "outside_temp"
//! type = "TEMPERATURE"
//! uri = "a:roof/temp"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use weather_core::Sensor;

use crate::error::ConfigResult;

/// Sensors of one station, as loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationConfig {
    /// Station name, used in logs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sensors to register, in order
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

impl StationConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
