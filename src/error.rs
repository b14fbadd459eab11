//! Error types for mail-fetcher
//!
//! A single crate-wide [`Error`] is used by the orchestrator, by fetcher
//! implementations and by lifecycle hooks. The orchestrator never wraps an
//! error it receives: whatever a fetcher returns is what the caller sees.

use thiserror::Error;

/// Result type alias for mail-fetcher operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for mail-fetcher
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "max_degree_of_parallelism")
        key: Option<String>,
    },

    /// The mail server could not be reached or refused the credentials
    #[error("connection error: {0}")]
    Connection(String),

    /// The mail server answered with something the fetcher could not use
    #[error("protocol error: {0}")]
    Protocol(String),

    /// A fetcher observed the cancellation token and stopped
    #[error("fetch cancelled")]
    Cancelled,

    /// A lifecycle hook failed
    #[error("hook error: {0}")]
    Hook(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a configuration error tied to a specific key
    pub fn config(key: &str, message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.to_string()),
        }
    }

    /// Returns true if the error was produced by an observed cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}
