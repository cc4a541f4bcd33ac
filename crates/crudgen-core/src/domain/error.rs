// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep a copy of the failure)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Input Grammar Errors
    // ========================================================================
    #[error("malformed field spec '{token}': expected `name:type`")]
    MalformedFieldSpec { token: String },

    #[error("malformed relation spec '{token}': expected `name:kind`")]
    MalformedRelationSpec { token: String },

    // ========================================================================
    // Naming Errors
    // ========================================================================
    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },

    // ========================================================================
    // Layout Errors
    // ========================================================================
    #[error("Absolute paths not allowed in project layout: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MalformedFieldSpec { token } => vec![
                format!("Could not read field '{}'", token),
                "Fields are separated by \", \" (comma and one space)".into(),
                "Names start with a letter or '_' and use only letters, digits and '_'".into(),
                "Example: --fields=\"name:string, status:enum(open,closed)\"".into(),
            ],
            Self::MalformedRelationSpec { token } => vec![
                format!("Could not read relation '{}'", token),
                "Relations are `name:kind` pairs separated by commas".into(),
                "Names start with a letter or '_' and use only letters, digits and '_'".into(),
                "Example: --relations=\"tasks:hasMany,owner:belongsTo\"".into(),
            ],
            Self::InvalidEntityName { name, .. } => vec![
                format!("'{}' cannot be used as an entity name", name),
                "Use a singular noun made of letters, digits, '_' or '-'".into(),
                "Examples: project, blog_post, order-item".into(),
            ],
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
                "Check the [paths] section of your configuration".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MalformedFieldSpec { .. } | Self::MalformedRelationSpec { .. } => {
                ErrorCategory::Grammar
            }
            Self::InvalidEntityName { .. } => ErrorCategory::Validation,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Grammar,
    Validation,
    Configuration,
}
