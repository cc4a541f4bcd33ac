//! Application layer for crudgen.
//!
//! This layer contains:
//! - **Services**: the generation orchestrator and the artifact writer
//! - **Ports**: interface definitions (traits) for the filesystem and scaffolder
//! - **Errors**: application-specific error types
//!
//! It sequences the domain layer but contains no rendering logic itself.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AppliedArtifact, ArtifactOutcome, ArtifactWriter, CrudRequest, GenerateService,
    GenerationOutcome, GenerationReport, PreparedRun, Stage, prepare,
};

pub use ports::{BlankArtifact, Filesystem, Scaffolder};

pub use error::ApplicationError;
