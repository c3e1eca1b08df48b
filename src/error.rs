//! Error types for commuter
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for commuter
#[derive(Error, Debug)]
pub enum CommuterError {
    /// A required field was not supplied
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// Mutually exclusive inputs were supplied together
    #[error("conflicting input: {message}")]
    ConflictingInput { message: String },

    /// No travel mode was selected for a commute
    #[error("no travel mode selected")]
    NoTransportSelected,

    /// Errors from the duration/geocoding provider
    #[error("provider error: {message}")]
    Provider {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Persistent storage errors
    #[error("storage error: {operation} failed on {path}")]
    Storage {
        operation: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Interactive input errors
    #[error("input error")]
    Input {
        #[source]
        source: std::io::Error,
    },

    /// Malformed command-line flags; carries clap's usage message
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl CommuterError {
    /// Create a new missing-field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a new conflicting-input error
    pub fn conflicting_input(message: impl Into<String>) -> Self {
        Self::ConflictingInput {
            message: message.into(),
        }
    }

    /// Create a new provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new provider error with an underlying cause
    pub fn provider_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Provider {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new storage error
    pub fn storage<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            operation: operation.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new interactive-input error
    pub fn input(source: std::io::Error) -> Self {
        Self::Input { source }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CommuterError>;
