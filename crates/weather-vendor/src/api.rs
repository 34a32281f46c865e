//! Third-party vendor interfaces
//!
//! These traits mirror the vendor APIs as shipped; the station adapts to
//! them and never changes them. Both report failures as [`std::io::Error`].

use std::io;

/// Vendor whose devices are read with a single stateless call
pub trait DirectVendor: Send + Sync {
    /// Returns true if the URI belongs to a sensor of this vendor
    fn can_handle_uri(&self, uri: &str) -> bool;

    /// Reads the current value from the sensor identified by the URI
    fn read_double_value(&self, uri: &str) -> io::Result<f64>;
}

/// Vendor that requires a connection object for every read
pub trait SessionVendor: Send + Sync {
    type Connection: VendorConnection;

    /// Returns true if the URI belongs to a sensor of this vendor
    fn accepts_uri(&self, uri: &str) -> bool;

    /// Opens a new connection. Dropping it releases the connection.
    fn connect(&self) -> io::Result<Self::Connection>;
}

/// A live connection to a [`SessionVendor`]
pub trait VendorConnection {
    /// Reads the current value from the sensor identified by the URI
    fn read_double_value(&mut self, uri: &str) -> io::Result<f64>;
}

impl<T: DirectVendor + ?Sized> DirectVendor for std::sync::Arc<T> {
    fn can_handle_uri(&self, uri: &str) -> bool {
        (**self).can_handle_uri(uri)
    }

    fn read_double_value(&self, uri: &str) -> io::Result<f64> {
        (**self).read_double_value(uri)
    }
}

impl<T: SessionVendor + ?Sized> SessionVendor for std::sync::Arc<T> {
    type Connection = T::Connection;

    fn accepts_uri(&self, uri: &str) -> bool {
        (**self).accepts_uri(uri)
    }

    fn connect(&self) -> io::Result<Self::Connection> {
        (**self).connect()
    }
}
