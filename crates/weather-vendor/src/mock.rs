//! Mock vendors for testing
//!
//! Both mocks claim every URI that starts with a fixed prefix and serve
//! values from an in-memory table. A URI without a value fails like an
//! unreachable device. Clones share state, so a test can keep a handle and
//! change values while the station owns another.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::{DirectVendor, SessionVendor, VendorConnection};

type ValueTable = RwLock<HashMap<String, f64>>;

fn lookup(values: &ValueTable, uri: &str) -> io::Result<f64> {
    values
        .read()
        .get(uri)
        .copied()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no value for {uri}")))
}

/// Mock of a stateless vendor
#[derive(Clone)]
pub struct MockDirectVendor {
    prefix: Arc<str>,
    values: Arc<ValueTable>,
}

impl MockDirectVendor {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Arc::from(prefix),
            values: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Set the value the device at `uri` reports
    pub fn set_value(&self, uri: &str, value: f64) {
        self.values.write().insert(uri.to_string(), value);
    }

    /// Make the device at `uri` fail on read
    pub fn clear_value(&self, uri: &str) {
        self.values.write().remove(uri);
    }
}

impl DirectVendor for MockDirectVendor {
    fn can_handle_uri(&self, uri: &str) -> bool {
        uri.starts_with(&*self.prefix)
    }

    fn read_double_value(&self, uri: &str) -> io::Result<f64> {
        lookup(&self.values, uri)
    }
}

/// Connection bookkeeping of a [`MockSessionVendor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Connections handed out
    pub opened: usize,
    /// Connections dropped
    pub released: usize,
}

impl SessionStats {
    /// Connections currently alive
    pub fn live(&self) -> usize {
        self.opened - self.released
    }
}

struct SessionShared {
    prefix: String,
    values: ValueTable,
    fail_connect: AtomicBool,
    opened: AtomicUsize,
    released: AtomicUsize,
}

/// Mock of a vendor that requires a connection per read
#[derive(Clone)]
pub struct MockSessionVendor {
    shared: Arc<SessionShared>,
}

impl MockSessionVendor {
    pub fn new(prefix: &str) -> Self {
        Self {
            shared: Arc::new(SessionShared {
                prefix: prefix.to_string(),
                values: RwLock::new(HashMap::new()),
                fail_connect: AtomicBool::new(false),
                opened: AtomicUsize::new(0),
                released: AtomicUsize::new(0),
            }),
        }
    }

    /// Set the value the device at `uri` reports
    pub fn set_value(&self, uri: &str, value: f64) {
        self.shared.values.write().insert(uri.to_string(), value);
    }

    /// Make the device at `uri` fail on read
    pub fn clear_value(&self, uri: &str) {
        self.shared.values.write().remove(uri);
    }

    /// Make every following `connect` fail
    pub fn set_fail_connect(&self, fail: bool) {
        self.shared.fail_connect.store(fail, Ordering::SeqCst);
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            opened: self.shared.opened.load(Ordering::SeqCst),
            released: self.shared.released.load(Ordering::SeqCst),
        }
    }
}

impl SessionVendor for MockSessionVendor {
    type Connection = MockConnection;

    fn accepts_uri(&self, uri: &str) -> bool {
        uri.starts_with(&self.shared.prefix)
    }

    fn connect(&self) -> io::Result<MockConnection> {
        if self.shared.fail_connect.load(Ordering::SeqCst) {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "Failed to connect",
            ));
        }
        self.shared.opened.fetch_add(1, Ordering::SeqCst);
        Ok(MockConnection {
            shared: self.shared.clone(),
        })
    }
}

/// Connection handed out by [`MockSessionVendor`]
pub struct MockConnection {
    shared: Arc<SessionShared>,
}

impl VendorConnection for MockConnection {
    fn read_double_value(&mut self, uri: &str) -> io::Result<f64> {
        lookup(&self.shared.values, uri)
    }
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        self.shared.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a:test", true)]
    #[case("a:", true)]
    #[case("b:test", false)]
    #[case("xa:test", false)]
    fn test_prefix_ownership(#[case] uri: &str, #[case] owned: bool) {
        assert_eq!(MockDirectVendor::new("a:").can_handle_uri(uri), owned);
        assert_eq!(
            MockSessionVendor::new("a:").accepts_uri(uri),
            owned
        );
    }

    #[test]
    fn test_clones_share_values() {
        let vendor = MockDirectVendor::new("a:");
        let handle = vendor.clone();
        handle.set_value("a:test", 1.5);
        assert_eq!(vendor.read_double_value("a:test").unwrap(), 1.5);

        handle.clear_value("a:test");
        assert!(vendor.read_double_value("a:test").is_err());
    }

    #[test]
    fn test_connection_counts_drop() {
        let vendor = MockSessionVendor::new("b:");
        vendor.set_value("b:test", 56.0);

        let mut connection = vendor.connect().unwrap();
        assert_eq!(vendor.stats().live(), 1);
        assert_eq!(connection.read_double_value("b:test").unwrap(), 56.0);
        drop(connection);

        assert_eq!(
            vendor.stats(),
            SessionStats {
                opened: 1,
                released: 1
            }
        );
    }

    #[test]
    fn test_fail_connect() {
        let vendor = MockSessionVendor::new("b:");
        vendor.set_fail_connect(true);
        let err = vendor.connect().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionRefused);

        vendor.set_fail_connect(false);
        assert!(vendor.connect().is_ok());
    }
}
