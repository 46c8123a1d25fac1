//! Error types for transform-text
//!
//! Centralized error handling using thiserror. The transformation functions
//! themselves are total and never produce these; errors only come from
//! catalog lookup, catalog loading and the UI layer.

use thiserror::Error;

/// All error types that can occur in transform-text
#[derive(Debug, Error)]
pub enum TransformError {
    /// Selection key not registered in the catalog
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Two catalog records share a selection key
    #[error("Duplicate tool key: {0}")]
    DuplicateKey(String),

    /// Catalog record names a rule that does not exist
    #[error("Invalid rule '{rule}' for tool '{key}'")]
    InvalidRule { key: String, rule: String },

    /// Catalog could not be read or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Clipboard export failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for transform-text operations
pub type Result<T> = std::result::Result<T, TransformError>;
