//! Error types and handling for comment-docs core

use std::time::Duration;
use thiserror::Error;

/// Result type alias for comment-docs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for comment-docs core
#[derive(Error, Debug)]
pub enum Error {
    /// Animation fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Page registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while loading the remote animation resource
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Request timed out after {after:?}")]
    Timeout { after: Duration },

    #[error("Invalid animation body: {message}")]
    InvalidBody { message: String },
}

/// Page registry errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Page '{0}' is not registered")]
    NotRegistered(String),

    #[error("Unknown page label: {0}")]
    UnknownLabel(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = Error::from(FetchError::Status(404));
        assert_eq!(error.to_string(), "Fetch error: Unexpected status: 404");

        let error = RegistryError::NotRegistered("Backend".to_string());
        assert_eq!(error.to_string(), "Page 'Backend' is not registered");

        let error = FetchError::Timeout {
            after: Duration::from_secs(10),
        };
        assert_eq!(error.to_string(), "Request timed out after 10s");

        let error = FetchError::Timeout {
            after: Duration::from_millis(250),
        };
        assert_eq!(error.to_string(), "Request timed out after 250ms");
    }
}
