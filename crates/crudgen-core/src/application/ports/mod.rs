//! Application ports (traits) for external dependencies.
//!
//! Ports define what the orchestrator needs from the outside world.
//! Adapters in `crudgen-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the application, implemented by infrastructure
//!   - `Filesystem`: file content I/O
//!   - `Scaffolder`: "create a blank artifact of kind K named N"

pub mod output;

pub use output::{BlankArtifact, Filesystem, Scaffolder};

#[cfg(test)]
pub use output::{MockFilesystem, MockScaffolder};
