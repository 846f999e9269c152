//! Unified application error handling.
//!
//! Wraps [`DomainError`] together with the failures that only exist outside
//! the domain (configuration, internal faults) and maps them to stable codes
//! and process exit codes.

use domain::{DomainError, ErrorKind};
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// A domain rule was violated
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(e) => match e.kind() {
                ErrorKind::Collaborator => "INTERNAL_ERROR",
                _ => "VALIDATION_ERROR",
            },
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Domain(e) if e.kind() != ErrorKind::Collaborator => 2,
            AppError::Config(_) => 3,
            _ => 1,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Domain(DomainError::Hashing(msg)) => {
                tracing::error!("Hashing error: {}", msg);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            // Show full message for client errors
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
