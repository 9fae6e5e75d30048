use thiserror::Error;

#[derive(Error, Debug)]
pub enum McpError {
    #[error("Missing required field: {field}")]
    Validation { field: &'static str },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Send failed: {0}")]
    Send(String),

    #[error("Receive failed: {0}")]
    Receive(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Operation timed out after {0}ms")]
    Timeout(u64),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::net::AddrParseError> for McpError {
    fn from(err: std::net::AddrParseError) -> Self {
        McpError::InvalidAddress(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, McpError>;
