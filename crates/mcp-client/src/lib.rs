//! MCP Command Dispatcher
//!
//! The thin orchestration layer between a [`Command`](mcp_common::protocol::Command)
//! and the wire: build the envelope, run one transport exchange, hand back
//! the raw response. No retries, no connection reuse; the first error aborts
//! the operation.

pub mod client;

pub use client::McpClient;
