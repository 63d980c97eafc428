//! Organization hierarchy collaborator trait.
//!
//! The hierarchy itself is persisted elsewhere; this crate only consumes it.
//! Implementations supply ancestor listings, display names, and the
//! organization-to-tenant-domain mapping.

use crate::model::{OrganizationId, TenantDomain};
use std::future::Future;

/// Read access to the organization hierarchy and tenant-domain mapping.
///
/// # Contract
///
/// * Ancestor chains are returned nearest-ancestor-first with the root last,
///   and never include the queried organization itself. The resolver trusts
///   the ordering and does not sort.
/// * `Ok(None)` means "no mapping recorded" and is not an error; callers
///   skip such organizations during a walk.
///
/// # Example Implementation
///
/// ```rust,no_run
/// use org_resolver::hierarchy::OrganizationHierarchy;
/// use org_resolver::{OrganizationId, TenantDomain};
/// use std::collections::HashMap;
///
/// struct TableHierarchy {
///     ancestors: HashMap<OrganizationId, Vec<OrganizationId>>,
///     names: HashMap<OrganizationId, String>,
///     tenants: HashMap<OrganizationId, TenantDomain>,
/// }
///
/// impl OrganizationHierarchy for TableHierarchy {
///     type Error = std::convert::Infallible;
///
///     async fn ancestor_organization_ids(
///         &self,
///         organization_id: &OrganizationId,
///     ) -> Result<Option<Vec<OrganizationId>>, Self::Error> {
///         Ok(self.ancestors.get(organization_id).cloned())
///     }
///
///     async fn organization_name_by_id(
///         &self,
///         organization_id: &OrganizationId,
///     ) -> Result<Option<String>, Self::Error> {
///         Ok(self.names.get(organization_id).cloned())
///     }
///
///     async fn resolve_tenant_domain(
///         &self,
///         organization_id: &OrganizationId,
///     ) -> Result<Option<TenantDomain>, Self::Error> {
///         Ok(self.tenants.get(organization_id).cloned())
///     }
/// }
/// ```
pub trait OrganizationHierarchy: Send + Sync {
    /// Error type for hierarchy access failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// List the ancestor chain of an organization, nearest first, root last.
    ///
    /// Returns `Ok(None)` when the organization has no recorded ancestors.
    fn ancestor_organization_ids(
        &self,
        organization_id: &OrganizationId,
    ) -> impl Future<Output = Result<Option<Vec<OrganizationId>>, Self::Error>> + Send;

    /// Look up an organization's display name.
    fn organization_name_by_id(
        &self,
        organization_id: &OrganizationId,
    ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send;

    /// Map an organization to the tenant domain hosting its identity directory.
    ///
    /// The reserved root organization never reaches this method; see
    /// [`TenantDomainResolver`](crate::tenant::TenantDomainResolver).
    fn resolve_tenant_domain(
        &self,
        organization_id: &OrganizationId,
    ) -> impl Future<Output = Result<Option<TenantDomain>, Self::Error>> + Send;
}
