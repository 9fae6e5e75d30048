use mcp_common::protocol::{Command, Envelope, Response, Result};
use mcp_common::transport::{Endpoint, SessionConfig, TcpTransport, Transport};

/// MCP client for dispatching a single command.
///
/// Opens a fresh TCP connection for each dispatched command; nothing is
/// shared or reused between calls, matching the one-invocation-one-request
/// protocol contract.
///
/// # Example
///
/// ```no_run
/// use mcp_client::McpClient;
/// use mcp_common::protocol::{ChatArgs, Command};
/// use mcp_common::transport::Endpoint;
///
/// let endpoint = Endpoint::new("127.0.0.1", 1234).unwrap();
/// let client = McpClient::new(endpoint);
///
/// let command = Command::Chat {
///     token: "secret".into(),
///     args: ChatArgs::new("What changed last week?"),
/// };
/// let response = client.send(&command).unwrap();
/// println!("{}", response.text().unwrap());
/// ```
pub struct McpClient<T = TcpTransport> {
    endpoint: Endpoint,
    transport: T,
}

impl McpClient<TcpTransport> {
    /// Creates a client with the default TCP transport and deadlines.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            transport: TcpTransport::new(),
        }
    }

    /// Creates a client with custom session deadlines.
    pub fn with_config(endpoint: Endpoint, config: SessionConfig) -> Self {
        Self {
            endpoint,
            transport: TcpTransport::with_config(config),
        }
    }
}

impl<T: Transport> McpClient<T> {
    /// Creates a client over an arbitrary transport implementation.
    pub fn with_transport(endpoint: Endpoint, transport: T) -> Self {
        Self { endpoint, transport }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Dispatches one command and returns the raw response.
    ///
    /// Validation and envelope construction happen before the transport is
    /// touched: a command with an empty required field fails with a
    /// `Validation` error and zero connection attempts.
    pub fn send(&self, command: &Command) -> Result<Response> {
        let envelope = Envelope::from_command(command)?;
        let payload = envelope.to_bytes()?;

        tracing::debug!(
            command = command.name(),
            bytes = payload.len(),
            endpoint = %self.endpoint,
            "dispatching request"
        );

        let reply = self.transport.exchange(&self.endpoint, &payload)?;
        Ok(Response::new(reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_common::protocol::{ChatArgs, LoginArgs, McpError};
    use std::cell::RefCell;

    /// Transport fake that records every exchange and returns a canned
    /// reply, for asserting how often the network would have been touched.
    struct CountingTransport {
        exchanges: RefCell<Vec<Vec<u8>>>,
        reply: Vec<u8>,
    }

    impl CountingTransport {
        fn new(reply: &[u8]) -> Self {
            Self {
                exchanges: RefCell::new(Vec::new()),
                reply: reply.to_vec(),
            }
        }

        fn exchange_count(&self) -> usize {
            self.exchanges.borrow().len()
        }
    }

    impl Transport for CountingTransport {
        fn exchange(&self, _endpoint: &Endpoint, payload: &[u8]) -> Result<Vec<u8>> {
            self.exchanges.borrow_mut().push(payload.to_vec());
            Ok(self.reply.clone())
        }
    }

    fn test_endpoint() -> Endpoint {
        Endpoint::new("127.0.0.1", 9000).unwrap()
    }

    #[test]
    fn test_send_passes_envelope_to_transport() {
        let transport = CountingTransport::new(br#"{"status":"ok"}"#);
        let client = McpClient::with_transport(test_endpoint(), transport);

        let command = Command::Login(LoginArgs::new("a@x.com", "p"));
        let response = client.send(&command).unwrap();

        assert_eq!(response.json().unwrap()["status"], "ok");
        assert_eq!(client.transport.exchange_count(), 1);

        let sent = client.transport.exchanges.borrow()[0].clone();
        let value: serde_json::Value = serde_json::from_slice(&sent).unwrap();
        assert_eq!(value["command"], "login");
    }

    #[test]
    fn test_validation_failure_never_touches_transport() {
        let transport = CountingTransport::new(b"unused");
        let client = McpClient::with_transport(test_endpoint(), transport);

        let command = Command::Chat {
            token: "tok".into(),
            args: ChatArgs::new(""),
        };
        let err = client.send(&command).unwrap_err();

        assert!(matches!(err, McpError::Validation { field: "question" }));
        assert_eq!(client.transport.exchange_count(), 0);
    }

    #[test]
    fn test_transport_error_is_propagated() {
        struct FailingTransport;
        impl Transport for FailingTransport {
            fn exchange(&self, _endpoint: &Endpoint, _payload: &[u8]) -> Result<Vec<u8>> {
                Err(McpError::Connection("refused".to_string()))
            }
        }

        let client = McpClient::with_transport(test_endpoint(), FailingTransport);
        let command = Command::Logout { token: "t".into() };
        assert!(matches!(
            client.send(&command),
            Err(McpError::Connection(_))
        ));
    }
}
