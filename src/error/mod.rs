//! Error types for Minerva.

use thiserror::Error;

/// Primary error type for all Minerva operations.
#[derive(Error, Debug)]
pub enum MinervaError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Datastore error (status {status}): {message}")]
    Datastore { status: u16, message: String },

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Tool execution error: {tool_name} — {message}")]
    ToolExecution { tool_name: String, message: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl MinervaError {
    /// Create a datastore error from an HTTP status and body.
    pub fn datastore(status: u16, message: impl Into<String>) -> Self {
        Self::Datastore {
            status,
            message: message.into(),
        }
    }

    /// Whether this error may go away on its own (network blips, server
    /// errors). Used for log-level selection on degraded paths, never for
    /// automatic retries.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::WebSocket(_) | Self::Io(_) | Self::Timeout(_) => true,
            Self::Datastore { status, .. } => (500..=599).contains(status) || *status == 429,
            _ => false,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MinervaError>;
