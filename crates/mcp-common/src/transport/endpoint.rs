use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::protocol::error::{McpError, Result};

/// A validated server address.
///
/// Both parts are checked at construction: the host must be a well-formed
/// IPv4 literal (no hostnames, matching the wire contract of the legacy
/// clients) and the port must be non-zero. A bad value is a configuration
/// error ([`McpError::InvalidAddress`]) raised before any socket is opened,
/// never a network error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: Ipv4Addr,
    port: u16,
}

impl Endpoint {
    /// Parses and validates a host/port pair.
    ///
    /// # Example
    ///
    /// ```
    /// use mcp_common::transport::Endpoint;
    ///
    /// let endpoint = Endpoint::new("127.0.0.1", 9000).unwrap();
    /// assert_eq!(endpoint.port(), 9000);
    ///
    /// assert!(Endpoint::new("not-an-ip", 9000).is_err());
    /// assert!(Endpoint::new("127.0.0.1", 0).is_err());
    /// ```
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let host = Ipv4Addr::from_str(host).map_err(|_| {
            McpError::InvalidAddress(format!("'{}' is not a valid IPv4 address", host))
        })?;
        if port == 0 {
            return Err(McpError::InvalidAddress(
                "server port must be non-zero".to_string(),
            ));
        }
        Ok(Self { host, port })
    }

    pub fn host(&self) -> Ipv4Addr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The address in the form `std::net` connect calls expect.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(self.host), self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
