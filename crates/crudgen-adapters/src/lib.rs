//! Infrastructure adapters for crudgen.
//!
//! This crate implements the ports defined in `crudgen_core::application::ports`.
//! It contains all filesystem access and process spawning.

pub mod filesystem;
pub mod scaffolder;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use scaffolder::{ArtisanScaffolder, StubScaffolder};
