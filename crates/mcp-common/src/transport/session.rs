//! Transport Session
//!
//! One [`Session`] carries out exactly one request/response exchange:
//! connect, write the envelope, read the reply until the framing strategy
//! says it is complete, close. Sessions are never reused or shared; the
//! dispatcher creates a fresh one per command invocation.
//!
//! The lifecycle is tracked explicitly:
//!
//! ```text
//! Idle -> Connecting -> Connected -> Sending -> Receiving -> Closed
//!               \___________\___________\___________\-> Errored
//! ```
//!
//! Any failure moves the session into the absorbing `Errored` state and
//! releases the socket. The socket is also released when the session is
//! dropped, so no exit path can leak a connection.

use std::io::Write;
use std::net::TcpStream;
use std::time::Duration;

use crate::protocol::error::{McpError, Result};

use super::endpoint::Endpoint;
use super::framing::Framing;

/// Deadlines applied to one exchange.
///
/// The legacy clients blocked forever on a hung server; bounded deadlines
/// are applied here instead. `None` disables the respective deadline and
/// restores the original fully-blocking behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
    pub write_timeout: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(5)),
            read_timeout: Some(Duration::from_secs(30)),
            write_timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Lifecycle states of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Connecting,
    Connected,
    Sending,
    Receiving,
    Closed,
    Errored,
}

/// Which operation an I/O error occurred in, for error classification.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Connect,
    Send,
    Receive,
}

/// The state machine for one TCP exchange.
///
/// # Example
///
/// ```no_run
/// use mcp_common::transport::{Endpoint, Session};
///
/// let endpoint = Endpoint::new("127.0.0.1", 9000).unwrap();
/// let mut session = Session::new(endpoint);
/// session.open().unwrap();
/// session.send(br#"{"command":"logout","token":"t"}"#).unwrap();
/// let reply = session.receive().unwrap();
/// ```
pub struct Session {
    endpoint: Endpoint,
    config: SessionConfig,
    framing: Framing,
    state: SessionState,
    stream: Option<TcpStream>,
}

impl Session {
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_config(endpoint, SessionConfig::default())
    }

    pub fn with_config(endpoint: Endpoint, config: SessionConfig) -> Self {
        Self {
            endpoint,
            config,
            framing: Framing::default(),
            state: SessionState::Idle,
            stream: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Connects to the endpoint and applies the configured deadlines.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Connection`] when the peer refuses or is
    /// unreachable, or [`McpError::Timeout`] when the connect deadline
    /// fires. The endpoint itself is validated at construction, so no
    /// address error can surface here.
    pub fn open(&mut self) -> Result<()> {
        self.state = SessionState::Connecting;
        let addr = self.endpoint.socket_addr();

        let connect_result = match self.config.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
            None => TcpStream::connect(addr),
        };
        let stream = match connect_result {
            Ok(stream) => stream,
            Err(e) => return Err(self.fail(Stage::Connect, e)),
        };

        if let Err(e) = stream.set_read_timeout(self.config.read_timeout) {
            return Err(self.fail(Stage::Connect, e));
        }
        if let Err(e) = stream.set_write_timeout(self.config.write_timeout) {
            return Err(self.fail(Stage::Connect, e));
        }

        tracing::debug!(endpoint = %self.endpoint, "connection established");
        self.stream = Some(stream);
        self.state = SessionState::Connected;
        Ok(())
    }

    /// Writes the serialized envelope.
    ///
    /// The payload goes out in one write call. A partial write is treated as
    /// fatal [`McpError::Send`] rather than resumed; the server reads the
    /// request as a single burst and a torn request is not recoverable
    /// within this protocol.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        if self.state != SessionState::Connected {
            let err = McpError::Send(format!("send called in state {:?}", self.state));
            return Err(self.error_state(err));
        }
        self.state = SessionState::Sending;

        let stream = match self.stream.as_mut() {
            Some(stream) => stream,
            None => {
                let err = McpError::Send("no open stream".to_string());
                return Err(self.error_state(err));
            }
        };

        let written = match stream.write(payload) {
            Ok(n) => n,
            Err(e) => return Err(self.fail(Stage::Send, e)),
        };
        if written != payload.len() {
            let err = McpError::Send(format!(
                "short write: {} of {} bytes",
                written,
                payload.len()
            ));
            return Err(self.error_state(err));
        }
        if let Err(e) = stream.flush() {
            return Err(self.fail(Stage::Send, e));
        }

        tracing::debug!(bytes = payload.len(), "request sent");
        Ok(())
    }

    /// Reads the complete reply, then closes the connection.
    ///
    /// The framing strategy decides when the reply is complete (see
    /// [`Framing`]); the socket is closed unconditionally once the loop
    /// ends, success or failure.
    pub fn receive(&mut self) -> Result<Vec<u8>> {
        if self.state != SessionState::Sending {
            let err = McpError::Receive(format!("receive called in state {:?}", self.state));
            return Err(self.error_state(err));
        }
        self.state = SessionState::Receiving;

        let framing = self.framing;
        let result = match self.stream.as_mut() {
            Some(stream) => framing.read_reply(stream),
            None => {
                let err = McpError::Receive("no open stream".to_string());
                return Err(self.error_state(err));
            }
        };

        match result {
            Ok(reply) => {
                tracing::debug!(bytes = reply.len(), "reply received");
                self.close();
                Ok(reply)
            }
            Err(e) => Err(self.fail(Stage::Receive, e)),
        }
    }

    /// Convenience wrapper: open, send, receive, close.
    pub fn exchange(&mut self, payload: &[u8]) -> Result<Vec<u8>> {
        self.open()?;
        self.send(payload)?;
        self.receive()
    }

    /// Releases the socket. Idempotent; also run on drop.
    pub fn close(&mut self) {
        self.stream = None;
        if self.state != SessionState::Errored {
            self.state = SessionState::Closed;
        }
    }

    /// Classifies an I/O error by stage, drops the socket, and moves the
    /// session into `Errored`.
    fn fail(&mut self, stage: Stage, err: std::io::Error) -> McpError {
        let classified = self.classify(stage, err);
        self.error_state(classified)
    }

    fn error_state(&mut self, err: McpError) -> McpError {
        tracing::warn!(endpoint = %self.endpoint, error = %err, "session failed");
        self.stream = None;
        self.state = SessionState::Errored;
        err
    }

    fn classify(&self, stage: Stage, err: std::io::Error) -> McpError {
        use std::io::ErrorKind;

        match err.kind() {
            ErrorKind::TimedOut | ErrorKind::WouldBlock => {
                let deadline = match stage {
                    Stage::Connect => self.config.connect_timeout,
                    Stage::Send => self.config.write_timeout,
                    Stage::Receive => self.config.read_timeout,
                };
                McpError::Timeout(deadline.map(|d| d.as_millis() as u64).unwrap_or(0))
            }
            _ => match stage {
                Stage::Connect => McpError::Connection(err.to_string()),
                Stage::Send => McpError::Send(err.to_string()),
                Stage::Receive => McpError::Receive(err.to_string()),
            },
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("endpoint", &self.endpoint.to_string())
            .field("state", &self.state)
            .finish()
    }
}
