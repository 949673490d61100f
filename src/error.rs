//! Error types for the circuit notation engine.
//!
//! The top-level [`crate::parse`] never returns these: it logs them and falls
//! back to an empty layout. [`crate::try_parse`] and the CLI surface them.

use thiserror::Error;

/// Result type alias using [`NotationError`].
pub type Result<T> = std::result::Result<T, NotationError>;

/// Unified error type for notation parsing and layout.
#[derive(Error, Debug)]
pub enum NotationError {
    // ============ Parsing Errors ============
    /// Parenthesis nesting deeper than the configured limit
    #[error("Nesting depth {depth} exceeds the limit of {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    // ============ Layout Errors ============
    /// Layout configuration rejected by validation
    #[error("Invalid layout configuration: {message}")]
    InvalidConfig { message: String },

    /// A computed coordinate is NaN or infinite
    #[error("Non-finite coordinate produced for element {id}")]
    NonFiniteGeometry { id: String },

    // ============ I/O Errors ============
    /// Error reading a notation file
    #[error("Failed to read notation file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error encoding the layout as JSON
    #[error("Failed to serialize layout: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NotationError {
    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a nesting depth error
    pub fn nesting_too_deep(depth: usize, limit: usize) -> Self {
        Self::NestingTooDeep { depth, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NotationError::nesting_too_deep(65, 64);
        assert_eq!(err.to_string(), "Nesting depth 65 exceeds the limit of 64");

        let err = NotationError::invalid_config("series gap must be finite");
        assert!(err.to_string().contains("series gap must be finite"));
    }
}
