//! Unified error handling for crudgen core.
//!
//! Wraps domain and application errors behind one type with user-actionable
//! suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for crudgen core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CrudgenError {
    /// Input grammar, naming or layout violations.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Failures while touching the project (filesystem, scaffolder).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CrudgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["This appears to be a bug in crudgen".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Grammar => ErrorCategory::Grammar,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Grammar,
    Validation,
    Configuration,
    Io,
    Collaborator,
    Internal,
}

/// Convenient result type alias.
pub type CrudgenResult<T> = Result<T, CrudgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_message() {
        let err: CrudgenError = DomainError::MalformedFieldSpec {
            token: "name".into(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "malformed field spec 'name': expected `name:type`"
        );
        assert_eq!(err.category(), ErrorCategory::Grammar);
    }

    #[test]
    fn scaffold_failures_are_collaborator_errors() {
        let err: CrudgenError = ApplicationError::ScaffoldFailed {
            artifact: "entity".into(),
            reason: "exit status 1".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Collaborator);
        assert!(!err.suggestions().is_empty());
    }
}
