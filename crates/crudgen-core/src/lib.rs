//! crudgen core - hexagonal architecture implementation
//!
//! Domain and application layers for the crudgen CRUD scaffolding tool,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           crudgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GenerateService, ArtifactWriter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Filesystem, Scaffolder)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     crudgen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ArtisanScaffolder...) │
//! └─────────────────────────────────────────┘
//!
//!   Domain layer (pure): naming, parser, type registry,
//!   renderers, marker patching, project layout
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crudgen_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn Scaffolder>) { unimplemented!() }
//!
//! let (filesystem, scaffolder) = adapters();
//! let layout = ProjectLayout::new(".", LayoutPaths::default()).unwrap();
//! let service = GenerateService::new(filesystem, scaffolder, layout);
//!
//! let report = service.generate(
//!     &CrudRequest::new("project").fields("name:string, status:enum(open,closed)"),
//! );
//! assert!(report.is_success());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AppliedArtifact, ArtifactOutcome, CrudRequest, GenerateService, GenerationOutcome,
        GenerationReport, PreparedRun, Stage, prepare,
        ports::{BlankArtifact, Filesystem, Scaffolder},
    };
    pub use crate::domain::{
        Blueprint, EntityName, EnumRuleMatching, FieldSpec, LayoutPaths, ProjectLayout,
        RelationKind, RelationSpec,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
