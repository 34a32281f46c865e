//! Common error types for the weather station

use thiserror::Error;

use crate::models::SensorType;

/// Result type for vendor reads
pub type VendorResult<T> = Result<T, VendorError>;

/// Result type for registry and engine operations
pub type StationResult<T> = Result<T, StationError>;

/// Failures reported by a vendor client while producing a value.
///
/// These are always contained per sensor: the engine turns them into an
/// absent, invalid reading and moves on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VendorError {
    /// Acquiring a vendor session failed
    #[error("Connection failed: {0}")]
    Connect(String),

    /// The device could not produce a value (unreachable, parse failure, I/O fault)
    #[error("Read failed: {0}")]
    Read(String),
}

/// Errors surfaced to callers of the station
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StationError {
    /// No configured vendor accepts the URI
    #[error("Cannot handle URI: {0}")]
    InvalidUri(String),

    /// More than one configured vendor accepts the URI
    #[error("URI {uri} is claimed by several vendors: {}", .vendors.join(", "))]
    AmbiguousUri { uri: String, vendors: Vec<String> },

    /// A sensor type has no entry in the policy table
    #[error("Unknown sensor type: {0}")]
    UnrecognizedType(SensorType),

    /// A sensor type name could not be parsed
    #[error("Unknown sensor type name: {0}")]
    UnknownSensorType(String),
}

impl StationError {
    /// Whether the error is raised while registering a sensor
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            StationError::InvalidUri(_) | StationError::AmbiguousUri { .. }
        )
    }
}
