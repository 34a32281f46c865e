//! Station configuration errors

use thiserror::Error;
use weather_core::StationError;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading a station configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid TOML or has the wrong shape
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configured sensor was rejected
    #[error("Station error: {0}")]
    Station(#[from] StationError),
}
