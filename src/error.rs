//! Error types for the friend circle
//!
//! This module provides error handling using thiserror for structured error
//! definitions. The command-line layer wraps these in anyhow for context.

use thiserror::Error;

/// Main error type for friend circle operations
#[derive(Error, Debug)]
pub enum CircleError {
    /// Malformed storage line (wrong field count, non-integer score)
    #[error("Format error: {0}")]
    Format(String),

    /// Rejected user input (empty name, out-of-range score, unknown criterion)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Update or removal with a position outside the collection
    #[error("No friend at position {index} (collection holds {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Text that cannot be represented in the configured file encoding
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be rendered
    #[error("Configuration write error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Temporary data file could not replace the real one
    #[error("Failed to replace data file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type alias for friend circle operations
pub type Result<T> = std::result::Result<T, CircleError>;
