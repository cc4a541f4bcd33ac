//! Application layer errors.
//!
//! These errors represent failures while touching the project, not input
//! problems. Input problems are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by the driven ports during a generation run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The scaffolding collaborator could not create a blank artifact.
    #[error("Could not scaffold {artifact}: {reason}")]
    ScaffoldFailed { artifact: String, reason: String },

    /// Shared in-memory state was poisoned by a panicking writer.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn filesystem(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FilesystemError {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run crudgen from the project root".into(),
            ],
            Self::ScaffoldFailed { .. } => vec![
                "Check that `php artisan` works in this directory".into(),
                "Or use --scaffolder stub to write blank files directly".into(),
            ],
            Self::StoreLockError => vec!["Retry the command".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::ScaffoldFailed { .. } => ErrorCategory::Collaborator,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
