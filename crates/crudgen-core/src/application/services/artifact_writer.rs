//! Applies artifact plans through the filesystem port.

use tracing::{debug, warn};

use crate::{
    application::{
        ports::Filesystem,
        services::report::{AppliedArtifact, ArtifactOutcome},
    },
    domain::{ArtifactPlan, Edit, MarkerPatch, append_line, apply_at_marker},
    error::CrudgenResult,
};

/// Turns an [`ArtifactPlan`] into file content.
pub struct ArtifactWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ArtifactWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    pub fn apply(&self, plan: &ArtifactPlan) -> CrudgenResult<AppliedArtifact> {
        let path = plan.path.as_path();

        let outcome = match &plan.edit {
            Edit::Create { content } => {
                self.ensure_parent(path)?;
                self.filesystem.write_file(path, content)?;
                ArtifactOutcome::Created
            }
            Edit::InsertAfterMarker { marker, insertion } => {
                let existing = self.filesystem.read_to_string(path)?;
                match apply_at_marker(&existing, marker, insertion) {
                    MarkerPatch::Applied(patched) => {
                        self.filesystem.write_file(path, &patched)?;
                        ArtifactOutcome::Patched
                    }
                    MarkerPatch::MarkerNotFound(_) => {
                        warn!(path = %path.display(), marker, "Marker not found, file left unchanged");
                        ArtifactOutcome::MarkerNotFound {
                            marker: (*marker).to_string(),
                        }
                    }
                }
            }
            Edit::AppendUnique { line, needle } => {
                let existing = if self.filesystem.exists(path) {
                    self.filesystem.read_to_string(path)?
                } else {
                    String::new()
                };

                if existing.contains(needle.as_str()) {
                    warn!(path = %path.display(), needle = %needle, "Already registered, not appending");
                    ArtifactOutcome::AlreadyRegistered
                } else {
                    self.ensure_parent(path)?;
                    self.filesystem.append(path, &append_line(&existing, line))?;
                    ArtifactOutcome::Appended
                }
            }
        };

        debug!(kind = %plan.kind, path = %path.display(), ?outcome, "Artifact applied");

        Ok(AppliedArtifact {
            kind: plan.kind,
            path: plan.path.clone(),
            outcome,
        })
    }

    fn ensure_parent(&self, path: &std::path::Path) -> CrudgenResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.filesystem.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}
