//! Scaffolder adapters: the "create a blank artifact" collaborator.

mod artisan;
mod stub;

pub use artisan::ArtisanScaffolder;
pub use stub::StubScaffolder;

/// Timestamp prefix format of migration file names.
pub const MIGRATION_TIMESTAMP_FORMAT: &str = "%Y_%m_%d_%H%M%S";
