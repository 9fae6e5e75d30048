//! MCP Request Envelopes
//!
//! An envelope is the single JSON document written to the socket for one
//! request. The layout mirrors what the server's dispatcher expects:
//!
//! ```text
//! { "command": "chat", "token": "...", "arguments": { ... } }
//! ```
//!
//! The token sits at the top level next to `command` (not inside
//! `arguments`), is absent for `login`, and `arguments` is absent for
//! `logout`, which sends only the command name and token. Key ordering is
//! arbitrary; the server parses the document as a whole.

use serde::{Deserialize, Serialize};

use super::command::Command;
use super::error::Result;

/// The serialized JSON request for one command.
///
/// Construction validates the command first, so an envelope with an empty
/// required field can never exist.
///
/// # Example
///
/// ```
/// use mcp_common::protocol::{Command, Envelope, LoginArgs};
///
/// let command = Command::Login(LoginArgs::new("a@x.com", "secret"));
/// let envelope = Envelope::from_command(&command).unwrap();
/// assert_eq!(envelope.command, "login");
/// assert!(envelope.token.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

impl Envelope {
    /// Builds the envelope for a command.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Validation`](super::McpError::Validation) when a
    /// required field is empty. Serialization of the argument structs cannot
    /// fail in practice but is propagated rather than swallowed.
    pub fn from_command(command: &Command) -> Result<Self> {
        command.validate()?;

        let arguments = match command {
            Command::Login(args) => Some(serde_json::to_value(args)?),
            // logout sends only the command name and token
            Command::Logout { .. } => None,
            Command::Chat { args, .. } => Some(serde_json::to_value(args)?),
            Command::GetSource { args, .. } => Some(serde_json::to_value(args)?),
            Command::StoreUser { args, .. } => Some(serde_json::to_value(args)?),
            Command::EditUser { args, .. } => Some(serde_json::to_value(args)?),
            Command::DeleteUser { args, .. } => Some(serde_json::to_value(args)?),
            Command::Keygen { args, .. } => Some(serde_json::to_value(args)?),
        };

        Ok(Envelope {
            command: command.name().to_string(),
            token: command.token().map(str::to_owned),
            arguments,
        })
    }

    /// Serializes the envelope to UTF-8 JSON bytes, ready for the wire.
    ///
    /// No trailing newline is appended; the server frames on connection
    /// state, not delimiters.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
