//! Unified error handling for buildgen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for buildgen core operations.
///
/// Every variant is a failure of the whole generation pass; no partial
/// report accompanies it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildgenError {
    /// Errors from the domain layer (invalid configuration or manifest).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (loading and scanning).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl BuildgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Try: buildgen config path".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in buildgen".into(),
                "Re-run with -vvv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BuildgenResult<T> = Result<T, BuildgenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Turn any error into an `Internal` error prefixed with `msg`.
    fn context(self, msg: impl Into<String>) -> BuildgenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> BuildgenResult<T> {
        self.map_err(|e| BuildgenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
