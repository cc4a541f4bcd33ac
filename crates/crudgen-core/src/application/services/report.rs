//! Run request and run report.

use std::{fmt, path::PathBuf};

use serde::{Serialize, Serializer};

use crate::{
    domain::{ArtifactKind, EnumRuleMatching},
    error::CrudgenError,
};

/// Raw input for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrudRequest {
    pub entity: String,
    pub fields: String,
    pub relations: String,
    pub enum_matching: EnumRuleMatching,
}

impl CrudRequest {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Self::default()
        }
    }

    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = fields.into();
        self
    }

    pub fn relations(mut self, relations: impl Into<String>) -> Self {
        self.relations = relations.into();
        self
    }

    pub fn enum_matching(mut self, matching: EnumRuleMatching) -> Self {
        self.enum_matching = matching;
        self
    }
}

/// The fixed, ordered stages of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ScaffoldEntityAndSchema,
    AugmentEntityAndSchema,
    Controller,
    ValidationSchema,
    Route,
    Views,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::ScaffoldEntityAndSchema,
        Stage::AugmentEntityAndSchema,
        Stage::Controller,
        Stage::ValidationSchema,
        Stage::Route,
        Stage::Views,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ScaffoldEntityAndSchema => "scaffold entity and schema",
            Self::AugmentEntityAndSchema => "augment entity and schema",
            Self::Controller => "create controller",
            Self::ValidationSchema => "create validation schema",
            Self::Route => "register route",
            Self::Views => "create views",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the artifact writer did to one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArtifactOutcome {
    Created,
    Patched,
    MarkerNotFound { marker: String },
    Appended,
    AlreadyRegistered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub outcome: ArtifactOutcome,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// Every stage ran.
    Success,
    /// `stage` failed; earlier stages' artifacts stay on disk.
    PartialFailure {
        stage: Stage,
        #[serde(serialize_with = "error_message")]
        error: CrudgenError,
    },
    /// Input was rejected before any stage ran.
    Fatal {
        #[serde(serialize_with = "error_message")]
        error: CrudgenError,
    },
}

fn error_message<S: Serializer>(error: &CrudgenError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Result of [`GenerateService::generate`](super::GenerateService::generate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub entity: String,
    pub outcome: GenerationOutcome,
    pub completed_stages: Vec<Stage>,
    pub artifacts: Vec<AppliedArtifact>,
    pub warnings: Vec<String>,
}

impl GenerationReport {
    pub(crate) fn started(entity: impl Into<String>, warnings: Vec<String>) -> Self {
        Self {
            entity: entity.into(),
            outcome: GenerationOutcome::Success,
            completed_stages: Vec::new(),
            artifacts: Vec::new(),
            warnings,
        }
    }

    pub(crate) fn fatal(entity: impl Into<String>, error: CrudgenError) -> Self {
        Self {
            outcome: GenerationOutcome::Fatal { error },
            ..Self::started(entity, Vec::new())
        }
    }

    pub(crate) fn record(&mut self, applied: AppliedArtifact) {
        if let ArtifactOutcome::MarkerNotFound { marker } = &applied.outcome {
            self.warnings.push(format!(
                "marker `{}` not found in {}; {} left unchanged",
                marker,
                applied.path.display(),
                applied.kind
            ));
        }
        self.artifacts.push(applied);
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, GenerationOutcome::Success)
    }

    pub fn error(&self) -> Option<&CrudgenError> {
        match &self.outcome {
            GenerationOutcome::Success => None,
            GenerationOutcome::PartialFailure { error, .. } | GenerationOutcome::Fatal { error } => {
                Some(error)
            }
        }
    }

    pub fn failed_stage(&self) -> Option<Stage> {
        match self.outcome {
            GenerationOutcome::PartialFailure { stage, .. } => Some(stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn marker_miss_becomes_warning() {
        let mut report = GenerationReport::started("Project", Vec::new());
        report.record(AppliedArtifact {
            kind: ArtifactKind::Entity,
            path: "app/Models/Project.php".into(),
            outcome: ArtifactOutcome::MarkerNotFound {
                marker: "use HasFactory;".into(),
            },
        });

        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("use HasFactory;"));
        assert!(report.is_success());
    }

    #[test]
    fn fatal_report_serializes_error_message() {
        let report = GenerationReport::fatal(
            "",
            DomainError::MalformedFieldSpec {
                token: "name".into(),
            }
            .into(),
        );
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcome"]["status"], "fatal");
        assert_eq!(
            json["outcome"]["error"],
            "malformed field spec 'name': expected `name:type`"
        );
        assert!(report.failed_stage().is_none());
    }
}
