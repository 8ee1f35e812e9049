//! Error types for tree construction, querying and validation.

use thiserror::Error;

use crate::validate::{Diagnostic, Severity};

/// Errors surfaced by the builder and node handles.
#[derive(Debug, Error)]
pub enum Error {
    /// A child expression, keyword or attachment target was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation is not allowed for the node it was called on.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The validator rejected the tree (strict validation only).
    #[error("validation failed with {errors} error(s)")]
    ValidationFailure {
        errors: usize,
        diagnostics: Vec<Diagnostic>,
    },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Create a validation failure from the diagnostics of a failed run.
    pub fn validation_failure(diagnostics: Vec<Diagnostic>) -> Self {
        let errors = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        Self::ValidationFailure {
            errors,
            diagnostics,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
