//! weather-station - Sensor registry and reading engine
//!
//! Aggregates readings from sensors reachable through several vendor APIs
//! into one map of sensor id to annotated value.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       WeatherStation                         │
//! │                                                              │
//! │  ┌──────────────────────┐      ┌──────────────────────────┐  │
//! │  │   SensorRegistry     │      │     ReadingEngine        │  │
//! │  │ (sensors + owning    │─────▶│ (read, validate, attach  │  │
//! │  │  vendor client)      │      │  unit via PolicyTable)   │  │
//! │  └──────────┬───────────┘      └──────────────────────────┘  │
//! │             │                                                │
//! │   ┌─────────┴──────────┐                                     │
//! │   │ Arc<dyn VendorClient> (one per vendor API)               │
//! │   └────────────────────┘                                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use weather_core::SensorType;
//! use weather_station::WeatherStation;
//! use weather_vendor::{DirectClient, SessionClient};
//!
//! let mut station = WeatherStation::new(vec![
//!     Arc::new(DirectClient::new("vendor-a", vendor_a)),
//!     Arc::new(SessionClient::new("vendor-b", vendor_b)),
//! ]);
//! station.register("roof_temp", SensorType::Temperature, "a:roof/temp")?;
//!
//! let readings = station.read_all()?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod registry;
pub mod station;

pub use config::StationConfig;
pub use engine::ReadingEngine;
pub use error::{ConfigError, ConfigResult};
pub use registry::{RegisteredSensor, SensorRegistry};
pub use station::WeatherStation;

// Re-export core types for convenience
pub use weather_core::{
    PolicyTable, Readings, Sensor, SensorType, SensorValue, StationError, StationResult,
    VendorClient,
};
