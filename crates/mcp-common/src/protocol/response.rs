//! MCP Server Responses
//!
//! The server writes whatever bytes it likes before pausing or closing the
//! connection; no schema is guaranteed. In practice this is a JSON document
//! or plain text, so the wrapper offers best-effort accessors on top of the
//! raw bytes. Application-level error payloads (e.g. invalid credentials)
//! are ordinary response bytes here, not transport errors.

use super::error::{McpError, Result};

/// The accumulated reply bytes from one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    bytes: Vec<u8>,
}

impl Response {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The response as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Decode`] when the bytes are not valid UTF-8.
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.bytes).map_err(|e| McpError::Decode(e.to_string()))
    }

    /// The response parsed as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`McpError::Decode`] when the bytes are not a JSON document.
    /// Callers that only display the response should fall back to the raw
    /// bytes on failure rather than treating this as fatal.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_slice(&self.bytes).map_err(|e| McpError::Decode(e.to_string()))
    }
}
