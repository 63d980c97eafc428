//! Resident-organization resolution for hierarchical multi-tenant identity
//! deployments.
//!
//! Given a user identity and an *accessed* organization, this crate works
//! out which ancestor organization the user actually *resides* in, walks
//! the path between the two, and performs the inverse lookup (username from
//! a known resident organization). The organization tree, the
//! tenant-domain mapping, and the per-tenant identity directories are
//! external collaborators expressed as traits.
//!
//! # Core Components
//!
//! - [`ResidentResolver`] - The four resolution operations
//! - [`OrganizationHierarchy`] - Trait for the organization tree and
//!   tenant-domain mapping
//! - [`DirectoryProvider`] / [`IdentityDirectory`] - Traits for per-tenant
//!   user stores
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use org_resolver::ResidentResolver;
//! use org_resolver::hierarchy::InMemoryHierarchy;
//! use org_resolver::directory::InMemoryDirectoryProvider;
//! use org_resolver::OrganizationId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let hierarchy = InMemoryHierarchy::new();
//! let directories = InMemoryDirectoryProvider::new();
//! let resolver = ResidentResolver::new(hierarchy, directories);
//!
//! let resident = resolver
//!     .resolve_resident_organization("user-id", &OrganizationId::new("org-leaf"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod error;
pub mod hierarchy;
pub mod model;
pub mod resolver;
pub mod tenant;

// Re-export commonly used types for convenience
pub use directory::{DirectoryProvider, IdentityDirectory, SecondaryUserStore};
pub use error::{OrgResolverError, OrgResolverResult};
pub use hierarchy::OrganizationHierarchy;
pub use model::{BasicOrganization, OrganizationId, TenantDomain, UserIdentity};
pub use resolver::ResidentResolver;
pub use tenant::{
    RootMapping, TenantDomainResolver, DEFAULT_ROOT_ORGANIZATION_ID, DEFAULT_SUPER_TENANT_DOMAIN,
};
