//! Adapters from vendor APIs to [`VendorClient`]

use tracing::debug;
use weather_core::{VendorClient, VendorError, VendorResult};

use crate::api::{DirectVendor, SessionVendor, VendorConnection};

/// Presents a [`DirectVendor`] as a [`VendorClient`]
///
/// Reads pass straight through; there is no session to manage.
pub struct DirectClient<V> {
    name: String,
    vendor: V,
}

impl<V: DirectVendor> DirectClient<V> {
    pub fn new(name: impl Into<String>, vendor: V) -> Self {
        Self {
            name: name.into(),
            vendor,
        }
    }

    /// Access the wrapped vendor
    pub fn vendor(&self) -> &V {
        &self.vendor
    }
}

impl<V: DirectVendor> VendorClient for DirectClient<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn owns_uri(&self, uri: &str) -> bool {
        self.vendor.can_handle_uri(uri)
    }

    fn read_value(&self, uri: &str) -> VendorResult<f64> {
        self.vendor
            .read_double_value(uri)
            .map_err(|e| VendorError::Read(e.to_string()))
    }
}

/// Presents a [`SessionVendor`] as a [`VendorClient`]
///
/// Every read opens its own connection and releases it before returning,
/// including when the read inside the connection fails.
pub struct SessionClient<V> {
    name: String,
    vendor: V,
}

impl<V: SessionVendor> SessionClient<V> {
    pub fn new(name: impl Into<String>, vendor: V) -> Self {
        Self {
            name: name.into(),
            vendor,
        }
    }

    /// Access the wrapped vendor
    pub fn vendor(&self) -> &V {
        &self.vendor
    }
}

impl<V: SessionVendor> VendorClient for SessionClient<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn owns_uri(&self, uri: &str) -> bool {
        self.vendor.accepts_uri(uri)
    }

    fn read_value(&self, uri: &str) -> VendorResult<f64> {
        let mut connection = self
            .vendor
            .connect()
            .map_err(|e| VendorError::Connect(e.to_string()))?;
        debug!(vendor = %self.name, uri = %uri, "Vendor session opened");

        let result = connection
            .read_double_value(uri)
            .map_err(|e| VendorError::Read(e.to_string()));

        drop(connection);
        debug!(vendor = %self.name, uri = %uri, "Vendor session released");

        result
    }
}
