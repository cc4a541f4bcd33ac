//! Application services - orchestrate use cases.

pub mod artifact_writer;
pub mod generate_service;
pub mod report;

pub use artifact_writer::ArtifactWriter;
pub use generate_service::{GenerateService, PreparedRun, prepare};
pub use report::{
    AppliedArtifact, ArtifactOutcome, CrudRequest, GenerationOutcome, GenerationReport, Stage,
};
