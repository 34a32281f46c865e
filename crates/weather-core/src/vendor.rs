//! Vendor capability trait
//!
//! Both vendor shapes (stateless calls and session-scoped calls) are
//! presented to the registry and engine through [`VendorClient`], so neither
//! has to special-case a vendor.

use crate::error::VendorResult;

/// Uniform capability: decide URI ownership and read a double for a URI
pub trait VendorClient: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Whether the URI addresses a device of this vendor
    ///
    /// Must be pure and callable before any connection exists.
    fn owns_uri(&self, uri: &str) -> bool;

    /// Read the current value of the device at `uri`
    ///
    /// Implementations that need a session acquire it here and release it
    /// before returning, whether or not the read succeeded.
    fn read_value(&self, uri: &str) -> VendorResult<f64>;
}
