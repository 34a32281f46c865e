//! Sensor registry
//!
//! Holds the registered sensors in registration order together with the
//! vendor client that owns each sensor's URI. Ownership is decided once, at
//! registration, so a URI no vendor understands is rejected immediately
//! instead of failing on every read.

use std::sync::Arc;

use tracing::{info, warn};
use weather_core::{Sensor, SensorType, StationError, StationResult, VendorClient};

/// A sensor together with the vendor client resolved for its URI
#[derive(Clone)]
pub struct RegisteredSensor {
    sensor: Sensor,
    client: Arc<dyn VendorClient>,
}

impl RegisteredSensor {
    pub fn sensor(&self) -> &Sensor {
        &self.sensor
    }

    pub fn client(&self) -> &Arc<dyn VendorClient> {
        &self.client
    }
}

impl std::fmt::Debug for RegisteredSensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredSensor")
            .field("sensor", &self.sensor)
            .field("vendor", &self.client.name())
            .finish()
    }
}

/// Append-only collection of sensors, validated against the configured vendors
pub struct SensorRegistry {
    /// Configured vendor clients, in the order they were given
    clients: Vec<Arc<dyn VendorClient>>,
    /// Registered sensors, in registration order
    sensors: Vec<RegisteredSensor>,
}

impl SensorRegistry {
    pub fn new(clients: Vec<Arc<dyn VendorClient>>) -> Self {
        Self {
            clients,
            sensors: Vec::new(),
        }
    }

    /// Register a sensor
    ///
    /// The URI must be owned by exactly one configured vendor. On error the
    /// registry is left unchanged. Ids are not checked for uniqueness; a
    /// repeated id replaces the earlier sensor's entry in `read_all` output.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        sensor_type: SensorType,
        uri: impl Into<String>,
    ) -> StationResult<()> {
        let sensor = Sensor::new(id, sensor_type, uri);
        let client = self.resolve(&sensor.uri).inspect_err(|e| {
            warn!(sensor_id = %sensor.id, uri = %sensor.uri, error = %e, "Rejected sensor registration");
        })?;

        info!(
            sensor_id = %sensor.id,
            sensor_type = %sensor.sensor_type,
            uri = %sensor.uri,
            vendor = %client.name(),
            "Registered sensor"
        );
        self.sensors.push(RegisteredSensor { sensor, client });
        Ok(())
    }

    /// Find the single vendor client that owns `uri`
    pub fn resolve(&self, uri: &str) -> StationResult<Arc<dyn VendorClient>> {
        let mut owners = self.clients.iter().filter(|client| client.owns_uri(uri));

        let Some(owner) = owners.next() else {
            return Err(StationError::InvalidUri(uri.to_string()));
        };

        let others: Vec<_> = owners.collect();
        if !others.is_empty() {
            return Err(StationError::AmbiguousUri {
                uri: uri.to_string(),
                vendors: std::iter::once(owner)
                    .chain(others)
                    .map(|client| client.name().to_string())
                    .collect(),
            });
        }

        Ok(owner.clone())
    }

    /// Registered sensors in registration order
    pub fn sensors(&self) -> impl Iterator<Item = &Sensor> + '_ {
        self.sensors.iter().map(RegisteredSensor::sensor)
    }

    /// Registered sensors with their resolved clients, in registration order
    pub fn entries(&self) -> &[RegisteredSensor] {
        &self.sensors
    }

    /// Names of the configured vendor clients
    pub fn vendor_names(&self) -> Vec<String> {
        self.clients
            .iter()
            .map(|client| client.name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}
