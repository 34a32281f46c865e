//! Bounds and unit policy per sensor type
//!
//! The validation rules are data, not branching: a [`PolicyTable`] maps each
//! [`SensorType`] to a [`SensorPolicy`] holding its unit and valid range.
//!
//! | Type | Unit | Valid range |
//! |------|------|-------------|
//! | TEMPERATURE | °C | -50.0 < v <= 150.0 |
//! | WIND_SPEED | km/h | v >= 0.0 |
//! | WIND_DIRECTION | (none) | -π <= v <= π |
//! | HUMIDITY | % | 0.0 <= v <= 100.0 |

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{StationError, StationResult};
use crate::models::SensorType;

/// One end of a valid range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "limit", rename_all = "snake_case")]
pub enum Bound {
    Unbounded,
    Inclusive(f64),
    Exclusive(f64),
}

impl Bound {
    fn admits_from_below(&self, value: f64) -> bool {
        match *self {
            Bound::Unbounded => true,
            Bound::Inclusive(limit) => value >= limit,
            Bound::Exclusive(limit) => value > limit,
        }
    }

    fn admits_from_above(&self, value: f64) -> bool {
        match *self {
            Bound::Unbounded => true,
            Bound::Inclusive(limit) => value <= limit,
            Bound::Exclusive(limit) => value < limit,
        }
    }
}

/// Unit and valid range for one sensor type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPolicy {
    /// Unit string attached to every reading of this type
    pub unit: String,
    /// Lower end of the valid range
    pub lower: Bound,
    /// Upper end of the valid range
    pub upper: Bound,
}

impl SensorPolicy {
    pub fn new(unit: impl Into<String>, lower: Bound, upper: Bound) -> Self {
        Self {
            unit: unit.into(),
            lower,
            upper,
        }
    }

    /// Whether a raw value lies within the range. NaN never does.
    pub fn accepts(&self, value: f64) -> bool {
        !value.is_nan() && self.lower.admits_from_below(value) && self.upper.admits_from_above(value)
    }
}

/// Policies keyed by sensor type
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    policies: HashMap<SensorType, SensorPolicy>,
}

impl PolicyTable {
    /// A table with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed station policy for all four sensor types
    pub fn standard() -> Self {
        Self::empty()
            .with(
                SensorType::Temperature,
                SensorPolicy::new("°C", Bound::Exclusive(-50.0), Bound::Inclusive(150.0)),
            )
            .with(
                SensorType::WindSpeed,
                SensorPolicy::new("km/h", Bound::Inclusive(0.0), Bound::Unbounded),
            )
            .with(
                SensorType::WindDirection,
                SensorPolicy::new("", Bound::Inclusive(-PI), Bound::Inclusive(PI)),
            )
            .with(
                SensorType::Humidity,
                SensorPolicy::new("%", Bound::Inclusive(0.0), Bound::Inclusive(100.0)),
            )
    }

    /// Builder form of [`PolicyTable::insert`]
    pub fn with(mut self, sensor_type: SensorType, policy: SensorPolicy) -> Self {
        self.insert(sensor_type, policy);
        self
    }

    /// Set the policy for a type, returning the one it replaces
    pub fn insert(&mut self, sensor_type: SensorType, policy: SensorPolicy) -> Option<SensorPolicy> {
        self.policies.insert(sensor_type, policy)
    }

    /// Look up the policy for a type
    ///
    /// A missing entry is a configuration defect, reported as
    /// [`StationError::UnrecognizedType`].
    pub fn get(&self, sensor_type: SensorType) -> StationResult<&SensorPolicy> {
        self.policies
            .get(&sensor_type)
            .ok_or(StationError::UnrecognizedType(sensor_type))
    }

    pub fn contains(&self, sensor_type: SensorType) -> bool {
        self.policies.contains_key(&sensor_type)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
