//! Error types for the fitrep_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitrep_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unrecognized activity code in a sensor packet
    #[error("unknown activity code: {0}")]
    InvalidActivity(String),

    /// Wrong parameter arity or out-of-domain value in a sensor packet
    #[error("malformed sensor input: {0}")]
    MalformedInput(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
