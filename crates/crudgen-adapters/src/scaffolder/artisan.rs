//! Delegates blank artifact creation to `php artisan make:*`.

use std::{ffi::OsString, path::PathBuf, process::Command};

use crudgen_core::{
    application::{
        ApplicationError,
        ports::{BlankArtifact, Filesystem, Scaffolder},
    },
    domain::{EntityName, ProjectLayout, layout::migration_suffix},
    error::CrudgenResult,
};
use tracing::{debug, info, instrument};

/// Scaffolder backed by the framework's own generators.
pub struct ArtisanScaffolder {
    filesystem: Box<dyn Filesystem>,
    layout: ProjectLayout,
    php_binary: OsString,
}

impl ArtisanScaffolder {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        layout: ProjectLayout,
        php_binary: impl Into<OsString>,
    ) -> Self {
        Self {
            filesystem,
            layout,
            php_binary: php_binary.into(),
        }
    }

    #[instrument(skip(self), fields(php = ?self.php_binary))]
    fn artisan(&self, kind: BlankArtifact, args: &[String]) -> CrudgenResult<()> {
        let output = Command::new(&self.php_binary)
            .arg("artisan")
            .args(args)
            .current_dir(self.layout.root())
            .output()
            .map_err(|e| ApplicationError::ScaffoldFailed {
                artifact: kind.to_string(),
                reason: format!("could not run {}: {}", self.php_binary.to_string_lossy(), e),
            })?;

        debug!(stdout = %String::from_utf8_lossy(&output.stdout).trim(), "artisan finished");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let detail = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(ApplicationError::ScaffoldFailed {
                artifact: kind.to_string(),
                reason: format!("artisan {} exited with {}: {}", args[0], output.status, detail.trim()),
            }
            .into());
        }
        Ok(())
    }

    /// Newest `*_create_<table>_table.php` by file name.
    fn newest_migration(&self, name: &EntityName) -> CrudgenResult<PathBuf> {
        let suffix = format!("_{}", migration_suffix(name));
        let dir = self.layout.migrations_dir();

        self.filesystem
            .list_dir(&dir)?
            .into_iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(&suffix))
            })
            .max_by(|a, b| a.file_name().cmp(&b.file_name()))
            .ok_or_else(|| {
                ApplicationError::ScaffoldFailed {
                    artifact: BlankArtifact::Schema.to_string(),
                    reason: format!("no *{} found in {}", suffix, dir.display()),
                }
                .into()
            })
    }
}

impl Scaffolder for ArtisanScaffolder {
    fn create_blank(&self, kind: BlankArtifact, name: &EntityName) -> CrudgenResult<PathBuf> {
        let path = match kind {
            BlankArtifact::Entity => {
                self.artisan(
                    kind,
                    &[
                        "make:model".to_string(),
                        name.studly().to_string(),
                        "-f".to_string(),
                    ],
                )?;
                self.layout.entity_file(name)
            }
            BlankArtifact::Schema => {
                self.artisan(
                    kind,
                    &[
                        "make:migration".to_string(),
                        format!("create_{}_table", name.table()),
                    ],
                )?;
                self.newest_migration(name)?
            }
            BlankArtifact::ValidationSchema => {
                self.artisan(kind, &["make:request".to_string(), name.request()])?;
                self.layout.request_file(name)
            }
        };
        info!(%kind, path = %path.display(), "Blank artifact scaffolded");
        Ok(path)
    }
}
