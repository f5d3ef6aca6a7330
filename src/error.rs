//! Error types for the fxpulse application.

use thiserror::Error;

/// The main error type for fxpulse.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/TUI related errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// HTTP client errors (connect, timeout, body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors raised while layering configuration sources
    #[error("Configuration error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The model answered, but not with something we can use.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Network connectivity errors
    #[error("Network error: {0}")]
    Network(String),

    /// A background request task failed to complete.
    #[error("Task error: {0}")]
    Task(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a new API status error.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create a new network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new task error.
    pub fn task(msg: impl Into<String>) -> Self {
        Self::Task(msg.into())
    }

    /// Check if this error is recoverable (the next cycle may succeed).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Network(_) | Self::InvalidResponse(_) | Self::Task(_) => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = Error::api(503, "overloaded");
        assert_eq!(err.to_string(), "API error (503): overloaded");
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(Error::network("reset").is_recoverable());
        assert!(Error::api(429, "slow down").is_recoverable());
        assert!(Error::api(500, "boom").is_recoverable());
        assert!(!Error::api(403, "bad key").is_recoverable());
        assert!(!Error::config("missing").is_recoverable());
    }
}
