//! Reading engine
//!
//! Reads every registered sensor once, validates the raw value against the
//! bounds for its type and attaches the unit. Vendor failures are contained
//! per sensor; a sensor type missing from the policy table aborts the pass.

use tracing::{debug, error, warn};
use weather_core::{PolicyTable, Readings, SensorValue, StationResult};

use crate::registry::{RegisteredSensor, SensorRegistry};

/// Turns registered sensors into annotated readings
#[derive(Debug, Clone)]
pub struct ReadingEngine {
    policies: PolicyTable,
}

impl Default for ReadingEngine {
    fn default() -> Self {
        Self::new(PolicyTable::standard())
    }
}

impl ReadingEngine {
    pub fn new(policies: PolicyTable) -> Self {
        Self { policies }
    }

    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Read every sensor of the registry, in registration order
    ///
    /// Each registered sensor yields one entry; a later sensor with the
    /// same id replaces an earlier one.
    pub fn read_all(&self, registry: &SensorRegistry) -> StationResult<Readings> {
        let mut readings = Readings::with_capacity(registry.len());
        let mut failed = 0usize;

        for entry in registry.entries() {
            let value = self.read_sensor(entry)?;
            if value.is_failed() {
                failed += 1;
            }
            readings.insert(entry.sensor().id.clone(), value);
        }

        debug!(
            sensors = registry.len(),
            entries = readings.len(),
            failed,
            "Read pass complete"
        );
        Ok(readings)
    }

    /// Read and validate a single sensor
    pub fn read_sensor(&self, entry: &RegisteredSensor) -> StationResult<SensorValue> {
        let sensor = entry.sensor();
        let policy = self.policies.get(sensor.sensor_type).inspect_err(|e| {
            error!(sensor_id = %sensor.id, error = %e, "No policy for sensor type");
        })?;

        let value = match entry.client().read_value(&sensor.uri) {
            Ok(raw) => {
                let valid = policy.accepts(raw);
                if valid {
                    debug!(sensor_id = %sensor.id, value = raw, "Sensor read");
                } else {
                    debug!(
                        sensor_id = %sensor.id,
                        sensor_type = %sensor.sensor_type,
                        value = raw,
                        "Sensor value out of range"
                    );
                }
                SensorValue::reading(raw, valid, policy.unit.as_str())
            }
            Err(e) => {
                warn!(
                    sensor_id = %sensor.id,
                    uri = %sensor.uri,
                    vendor = %entry.client().name(),
                    error = %e,
                    "Sensor read failed"
                );
                SensorValue::failed(policy.unit.as_str())
            }
        };

        Ok(value)
    }
}
