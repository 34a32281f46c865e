//! weather-core - Core traits and types for weather station sensors
//!
//! This crate provides the abstractions shared by every layer of the
//! station: the sensor data model, the vendor capability that hides how a
//! third-party API is reached, and the per-type bounds/unit policy.
//!
//! # Architecture
//!
//! ```text
//!   SensorRegistry ──owns_uri──▶ VendorClient (direct | session)
//!         │
//!         ▼
//!   ReadingEngine ──read_value──▶ VendorClient
//!         │
//!         └──lookup──▶ PolicyTable ──▶ SensorValue { value, valid, unit }
//! ```

pub mod error;
pub mod models;
pub mod policy;
pub mod vendor;

pub use error::{StationError, StationResult, VendorError, VendorResult};
pub use models::{Readings, Sensor, SensorType, SensorValue};
pub use policy::{Bound, PolicyTable, SensorPolicy};
pub use vendor::VendorClient;
