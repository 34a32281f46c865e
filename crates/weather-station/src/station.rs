//! Weather station facade

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use weather_core::{PolicyTable, Readings, Sensor, SensorType, StationResult, VendorClient};

use crate::config::StationConfig;
use crate::engine::ReadingEngine;
use crate::error::ConfigResult;
use crate::registry::SensorRegistry;

/// Registry and engine behind one API: register sensors, then read them all
///
/// Registration needs `&mut self`, reading only `&self`. Sharing a station
/// between threads therefore means registering everything up front.
pub struct WeatherStation {
    registry: SensorRegistry,
    engine: ReadingEngine,
}

impl WeatherStation {
    /// Create a station over the given vendors with the standard policies
    pub fn new(clients: Vec<Arc<dyn VendorClient>>) -> Self {
        Self::with_policies(clients, PolicyTable::standard())
    }

    /// Create a station with a custom policy table
    pub fn with_policies(clients: Vec<Arc<dyn VendorClient>>, policies: PolicyTable) -> Self {
        Self {
            registry: SensorRegistry::new(clients),
            engine: ReadingEngine::new(policies),
        }
    }

    /// Create a station and register every sensor listed in the config
    ///
    /// Stops at the first sensor whose URI is not owned by exactly one vendor.
    pub fn from_config(
        config: &StationConfig,
        clients: Vec<Arc<dyn VendorClient>>,
    ) -> StationResult<Self> {
        let mut station = Self::new(clients);
        for sensor in &config.sensors {
            station.register(sensor.id.clone(), sensor.sensor_type, sensor.uri.clone())?;
        }
        info!(
            station = config.name.as_deref().unwrap_or("unnamed"),
            sensors = station.registry.len(),
            "Station configured"
        );
        Ok(station)
    }

    /// Load a TOML config file and build the station from it
    pub fn from_config_file(
        path: impl AsRef<Path>,
        clients: Vec<Arc<dyn VendorClient>>,
    ) -> ConfigResult<Self> {
        let config = StationConfig::from_file(path)?;
        Ok(Self::from_config(&config, clients)?)
    }

    /// Register a sensor; fails if no single vendor owns the URI
    pub fn register(
        &mut self,
        id: impl Into<String>,
        sensor_type: SensorType,
        uri: impl Into<String>,
    ) -> StationResult<()> {
        self.registry.register(id, sensor_type, uri)
    }

    /// Read every registered sensor
    ///
    /// Vendor failures degrade single entries to an absent, invalid value.
    /// Only a sensor type without a policy makes the whole call fail.
    pub fn read_all(&self) -> StationResult<Readings> {
        self.engine.read_all(&self.registry)
    }

    /// Registered sensors in registration order
    pub fn sensors(&self) -> Vec<&Sensor> {
        self.registry.sensors().collect()
    }

    pub fn registry(&self) -> &SensorRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &ReadingEngine {
        &self.engine
    }
}
