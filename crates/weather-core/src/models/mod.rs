//! Shared data models for the weather station

mod sensor;
mod value;

pub use sensor::*;
pub use value::*;
