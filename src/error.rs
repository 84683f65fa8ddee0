//! Unified error types for the info service.

use thiserror::Error;

/// Unified error type for the info service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Host name could not be queried from the operating system.
    #[error("failed to query host name: {0}")]
    Hostname(#[source] std::io::Error),

    /// Host name is not valid UTF-8.
    #[error("host name is not valid UTF-8: {0}")]
    HostnameEncoding(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
