//! Tenant-domain resolution for organizations.
//!
//! Maps an organization to the tenant domain hosting its identity
//! directory. The reserved root organization maps to the fixed super-tenant
//! domain without consulting the hierarchy collaborator.

use crate::error::{OrgResolverError, OrgResolverResult};
use crate::hierarchy::OrganizationHierarchy;
use crate::model::{OrganizationId, TenantDomain};

/// Default identifier of the reserved root organization.
pub const DEFAULT_ROOT_ORGANIZATION_ID: &str = "ROOT";

/// Default tenant domain of the super tenant hosting the root organization.
pub const DEFAULT_SUPER_TENANT_DOMAIN: &str = "super";

/// The reserved root organization and the super-tenant domain it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootMapping {
    /// Identifier of the root organization.
    pub root_organization_id: OrganizationId,
    /// Tenant domain returned for the root organization.
    pub super_tenant_domain: TenantDomain,
}

impl RootMapping {
    pub fn new(root_organization_id: OrganizationId, super_tenant_domain: TenantDomain) -> Self {
        Self {
            root_organization_id,
            super_tenant_domain,
        }
    }
}

impl Default for RootMapping {
    fn default() -> Self {
        Self {
            root_organization_id: OrganizationId::new(DEFAULT_ROOT_ORGANIZATION_ID),
            super_tenant_domain: TenantDomain::new(DEFAULT_SUPER_TENANT_DOMAIN),
        }
    }
}

/// Resolves the tenant domain associated with an organization.
///
/// Borrowed from a [`ResidentResolver`](crate::resolver::ResidentResolver)
/// for the duration of one walk. `Ok(None)` means the organization has no
/// tenant-domain mapping; walks skip such organizations rather than failing.
#[derive(Debug)]
pub struct TenantDomainResolver<'a, H> {
    hierarchy: &'a H,
    root: &'a RootMapping,
}

impl<'a, H: OrganizationHierarchy> TenantDomainResolver<'a, H> {
    pub fn new(hierarchy: &'a H, root: &'a RootMapping) -> Self {
        Self { hierarchy, root }
    }

    /// Resolve the tenant domain for an organization.
    ///
    /// The root organization short-circuits to the super-tenant domain
    /// without a collaborator call. Collaborator failures surface as
    /// [`OrgResolverError::TenantResolution`].
    pub async fn resolve(
        &self,
        organization_id: &OrganizationId,
    ) -> OrgResolverResult<Option<TenantDomain>> {
        if *organization_id == self.root.root_organization_id {
            return Ok(Some(self.root.super_tenant_domain.clone()));
        }
        self.hierarchy
            .resolve_tenant_domain(organization_id)
            .await
            .map_err(|e| OrgResolverError::tenant_resolution(organization_id.clone(), e))
    }
}
