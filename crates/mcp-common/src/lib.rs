//! MCP Common Types and Transport
//!
//! This crate provides the core protocol definitions and TCP transport layer
//! shared by every MCP client command.
//!
//! # Overview
//!
//! The MCP server speaks a plaintext JSON protocol over raw TCP: the client
//! opens a connection, writes one JSON envelope, reads the reply until the
//! server stops sending, and closes. This crate contains everything the
//! individual commands share:
//!
//! - **Protocol Layer**: the [`protocol::Command`] variants, envelope
//!   construction, response wrapper, and error taxonomy
//! - **Transport Layer**: endpoint validation, the single-exchange
//!   [`transport::Session`], and the reply framing strategy
//!
//! # Wire Protocol
//!
//! - **Transport**: one TCP connection per request, closed after the reply
//! - **Serialization**: JSON, no length prefix, no TLS
//! - **Request Format**: `{"command": <name>, "token"?: <str>, "arguments"?: {..}}`
//! - **Reply Framing**: read until a short read or EOF (see [`transport::Framing`])
//!
//! # Example
//!
//! ```no_run
//! use mcp_common::protocol::{ChatArgs, Command};
//! use mcp_common::transport::{Endpoint, TcpTransport, Transport};
//! use mcp_common::protocol::Envelope;
//!
//! let command = Command::Chat {
//!     token: "secret".into(),
//!     args: ChatArgs::new("What is the answer?"),
//! };
//! let payload = Envelope::from_command(&command).unwrap().to_bytes().unwrap();
//!
//! let endpoint = Endpoint::new("127.0.0.1", 1234).unwrap();
//! let reply = TcpTransport::new().exchange(&endpoint, &payload).unwrap();
//! ```

pub mod protocol;
pub mod transport;

pub use protocol::*;
