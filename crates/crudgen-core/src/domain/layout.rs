//! Convention-derived artifact locations.
//!
//! [`ProjectLayout`] is a pure resolver from an entity's names to the paths
//! its artifacts live at. It never touches the filesystem, so conventions are
//! testable on their own.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, naming::EntityName};

/// Framework-standard directories, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutPaths {
    pub models_dir: PathBuf,
    pub controllers_dir: PathBuf,
    pub requests_dir: PathBuf,
    pub migrations_dir: PathBuf,
    pub views_dir: PathBuf,
    pub routes_file: PathBuf,
}

impl Default for LayoutPaths {
    fn default() -> Self {
        Self {
            models_dir: "app/Models".into(),
            controllers_dir: "app/Http/Controllers/Api".into(),
            requests_dir: "app/Http/Requests".into(),
            migrations_dir: "database/migrations".into(),
            views_dir: "resources/views".into(),
            routes_file: "routes/api.php".into(),
        }
    }
}

impl LayoutPaths {
    /// Every configured path must be relative to the project root.
    pub fn validate(&self) -> Result<(), DomainError> {
        for path in [
            &self.models_dir,
            &self.controllers_dir,
            &self.requests_dir,
            &self.migrations_dir,
            &self.views_dir,
            &self.routes_file,
        ] {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Paths for one project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    paths: LayoutPaths,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, paths: LayoutPaths) -> Result<Self, DomainError> {
        paths.validate()?;
        Ok(Self {
            root: root.into(),
            paths,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `app/Models/Project.php`
    pub fn entity_file(&self, name: &EntityName) -> PathBuf {
        self.root
            .join(&self.paths.models_dir)
            .join(format!("{}.php", name.studly()))
    }

    /// `app/Http/Controllers/Api/ProjectController.php`
    pub fn controller_file(&self, name: &EntityName) -> PathBuf {
        self.root
            .join(&self.paths.controllers_dir)
            .join(format!("{}.php", name.controller()))
    }

    /// `app/Http/Requests/ProjectRequest.php`
    pub fn request_file(&self, name: &EntityName) -> PathBuf {
        self.root
            .join(&self.paths.requests_dir)
            .join(format!("{}.php", name.request()))
    }

    pub fn migrations_dir(&self) -> PathBuf {
        self.root.join(&self.paths.migrations_dir)
    }

    /// `database/migrations/2026_10_19_120000_create_projects_table.php`
    pub fn migration_file(&self, timestamp: &str, name: &EntityName) -> PathBuf {
        self.migrations_dir()
            .join(format!("{timestamp}_{}", migration_suffix(name)))
    }

    /// `resources/views/projects`
    pub fn views_dir(&self, name: &EntityName) -> PathBuf {
        self.root.join(&self.paths.views_dir).join(name.plural_lower())
    }

    /// `resources/views/projects/index.blade.php`
    pub fn view_file(&self, name: &EntityName, view: &str) -> PathBuf {
        self.views_dir(name).join(format!("{view}.blade.php"))
    }

    pub fn routes_file(&self) -> PathBuf {
        self.root.join(&self.paths.routes_file)
    }
}

/// File-name suffix shared by every create-table migration of an entity.
pub fn migration_suffix(name: &EntityName) -> String {
    format!("create_{}_table.php", name.table())
}
