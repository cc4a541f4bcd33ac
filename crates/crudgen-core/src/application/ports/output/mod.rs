//! Driven (output) ports - implemented by infrastructure.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::domain::EntityName;
use crate::error::CrudgenResult;

/// Port for file content I/O.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> CrudgenResult<String>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Append content to a file, creating it when missing.
    fn append(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Direct children of a directory, sorted by path.
    fn list_dir(&self, path: &Path) -> CrudgenResult<Vec<PathBuf>>;
}

/// Blank artifacts the scaffolding collaborator knows how to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankArtifact {
    /// Entity class containing the factory trait usage line.
    Entity,
    /// Timestamp-named create-table migration.
    Schema,
    /// Form request with an empty rule list.
    ValidationSchema,
}

impl fmt::Display for BlankArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Entity => "entity",
            Self::Schema => "schema",
            Self::ValidationSchema => "validation schema",
        })
    }
}

/// Port for the framework's scaffolding primitive.
///
/// Implemented by:
/// - `crudgen_adapters::scaffolder::ArtisanScaffolder` (shells out to `php artisan`)
/// - `crudgen_adapters::scaffolder::StubScaffolder` (writes stubs directly)
#[cfg_attr(test, mockall::automock)]
pub trait Scaffolder: Send + Sync {
    /// Create a blank artifact and return the path it lives at.
    fn create_blank(&self, kind: BlankArtifact, name: &EntityName) -> CrudgenResult<PathBuf>;
}
