//! Organization hierarchy access.
//!
//! The [`OrganizationHierarchy`] trait is the seam to whatever stores the
//! organization tree and its tenant-domain mapping; [`InMemoryHierarchy`] is
//! a table-backed implementation for tests and simple deployments.

pub mod in_memory;
pub mod provider;

pub use in_memory::{InMemoryHierarchy, InMemoryHierarchyBuilder, InMemoryHierarchyError};
pub use provider::OrganizationHierarchy;
