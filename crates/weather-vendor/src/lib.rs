//! weather-vendor - Vendor adapters for the weather station
//!
//! The station reads from two third-party APIs with incompatible connection
//! models. This crate describes both shapes and adapts each to the uniform
//! [`VendorClient`] capability from `weather-core`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     dyn VendorClient                         │
//! │        owns_uri(uri) -> bool   read_value(uri) -> f64        │
//! │                                                              │
//! │   ┌──────────────────────┐     ┌──────────────────────────┐  │
//! │   │   DirectClient<V>    │     │    SessionClient<V>      │  │
//! │   │   (pass-through)     │     │ connect → read → drop    │  │
//! │   └──────────┬───────────┘     └────────────┬─────────────┘  │
//! │              │                              │                │
//! │      ┌───────┴───────┐            ┌─────────┴────────┐       │
//! │      │ DirectVendor  │            │  SessionVendor   │       │
//! │      │ (vendor API)  │            │ + VendorConnection│      │
//! │      └───────────────┘            └──────────────────┘       │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod client;
pub mod mock;

pub use api::{DirectVendor, SessionVendor, VendorConnection};
pub use client::{DirectClient, SessionClient};
pub use mock::{MockDirectVendor, MockSessionVendor, SessionStats};

// Re-export for convenience
pub use weather_core::{VendorClient, VendorError, VendorResult};
