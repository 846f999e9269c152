//! Domain-level errors.
//!
//! Every business-rule violation in the identity model is reported as a
//! [`DomainError`]. Each variant carries the operation that failed and the
//! field or rule involved, so callers can branch on [`DomainError::kind`]
//! instead of parsing messages.

use std::fmt;

use thiserror::Error;

/// Cross-field rules that are not about the shape of a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyViolation {
    /// New password equals the old one
    PasswordUnchanged,
    /// New password equals the username
    PasswordEqualsUsername,
    /// Password scored below the strong threshold
    PasswordTooWeak,
    /// Supplied current password does not match the stored hash
    CurrentPasswordNotConfirmed,
    /// Enablement window starts after it ends
    StartAfterEnd,
    /// Operation requires an active tenant
    TenantInactive,
}

impl fmt::Display for PolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            PolicyViolation::PasswordUnchanged => "The password is unchanged.",
            PolicyViolation::PasswordEqualsUsername => {
                "The username and password must not be the same."
            }
            PolicyViolation::PasswordTooWeak => "The password must be stronger.",
            PolicyViolation::CurrentPasswordNotConfirmed => "Current password not confirmed.",
            PolicyViolation::StartAfterEnd => "Enablement start and/or end date is invalid.",
            PolicyViolation::TenantInactive => "Tenant is not active.",
        };
        f.write_str(message)
    }
}

/// Coarse classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    Length,
    Format,
    Policy,
    IdentifierParse,
    /// A collaborator outside the domain (hashing) failed
    Collaborator,
}

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A mandatory field was empty
    #[error("{operation}: {field} is required.")]
    Required {
        operation: &'static str,
        field: &'static str,
    },

    /// A field's length fell outside its inclusive bounds
    #[error("{operation}: {field} must be between {min} and {max} characters (got {actual}).")]
    Length {
        operation: &'static str,
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    /// A field failed its structural pattern
    #[error("{operation}: {field} or its format is invalid: {value}")]
    Format {
        operation: &'static str,
        field: &'static str,
        value: String,
    },

    /// A cross-field rule was violated
    #[error("{operation}: {violation}")]
    Policy {
        operation: &'static str,
        violation: PolicyViolation,
    },

    /// The identifier parser rejected the input
    #[error("{operation}({value}): {source}")]
    IdentifierParse {
        operation: &'static str,
        value: String,
        #[source]
        source: uuid::Error,
    },

    /// The password hashing collaborator failed
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    /// Create a required-field error
    pub fn required(operation: &'static str, field: &'static str) -> Self {
        DomainError::Required { operation, field }
    }

    /// Create a length-bound error
    pub fn length(
        operation: &'static str,
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    ) -> Self {
        DomainError::Length {
            operation,
            field,
            min,
            max,
            actual,
        }
    }

    /// Create a format error
    pub fn format(operation: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        DomainError::Format {
            operation,
            field,
            value: value.into(),
        }
    }

    /// Create a policy error
    pub fn policy(operation: &'static str, violation: PolicyViolation) -> Self {
        DomainError::Policy {
            operation,
            violation,
        }
    }

    /// Create a hashing error
    pub fn hashing(msg: impl Into<String>) -> Self {
        DomainError::Hashing(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Required { .. } => ErrorKind::Required,
            DomainError::Length { .. } => ErrorKind::Length,
            DomainError::Format { .. } => ErrorKind::Format,
            DomainError::Policy { .. } => ErrorKind::Policy,
            DomainError::IdentifierParse { .. } => ErrorKind::IdentifierParse,
            DomainError::Hashing(_) => ErrorKind::Collaborator,
        }
    }

    /// Stable error code for clients
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Required => "REQUIRED",
            ErrorKind::Length => "LENGTH",
            ErrorKind::Format => "FORMAT",
            ErrorKind::Policy => "POLICY",
            ErrorKind::IdentifierParse => "IDENTIFIER_PARSE",
            ErrorKind::Collaborator => "COLLABORATOR",
        }
    }

    /// The operation that raised the error, when known
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            DomainError::Required { operation, .. }
            | DomainError::Length { operation, .. }
            | DomainError::Format { operation, .. }
            | DomainError::Policy { operation, .. }
            | DomainError::IdentifierParse { operation, .. } => Some(operation),
            DomainError::Hashing(_) => None,
        }
    }

    /// The policy rule that was violated, if this is a policy error
    pub fn violation(&self) -> Option<PolicyViolation> {
        match self {
            DomainError::Policy { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Checks a required, length-bounded text field in the standard order:
/// required first, then length.
pub(crate) fn check_text(
    operation: &'static str,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::required(operation, field));
    }
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(DomainError::length(operation, field, min, max, actual));
    }
    Ok(())
}
