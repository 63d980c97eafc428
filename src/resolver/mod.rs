//! The resident-organization resolver.

pub mod resident;

pub use resident::ResidentResolver;
