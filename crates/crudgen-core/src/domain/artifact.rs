//! Artifact plans: one rendered text bound to its destination.

use std::{fmt, path::PathBuf};

use serde::Serialize;

/// The artifact kinds a generation run touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Entity,
    Schema,
    Controller,
    ValidationSchema,
    Route,
    View,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Schema => "schema",
            Self::Controller => "controller",
            Self::ValidationSchema => "validation schema",
            Self::Route => "route",
            Self::View => "view",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a plan changes its destination file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Write the whole file, replacing any previous content.
    Create { content: String },
    /// Insert right after the first occurrence of `marker`.
    InsertAfterMarker {
        marker: &'static str,
        insertion: String,
    },
    /// Append `line` unless the file already contains `needle`.
    AppendUnique { line: String, needle: String },
}

/// A rendered change, consumed once by the artifact writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPlan {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub edit: Edit,
}

impl ArtifactPlan {
    pub fn create(kind: ArtifactKind, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            edit: Edit::Create {
                content: content.into(),
            },
        }
    }

    pub fn insert_after(
        kind: ArtifactKind,
        path: impl Into<PathBuf>,
        marker: &'static str,
        insertion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            edit: Edit::InsertAfterMarker {
                marker,
                insertion: insertion.into(),
            },
        }
    }

    pub fn append_unique(
        kind: ArtifactKind,
        path: impl Into<PathBuf>,
        line: impl Into<String>,
        needle: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            path: path.into(),
            edit: Edit::AppendUnique {
                line: line.into(),
                needle: needle.into(),
            },
        }
    }
}
