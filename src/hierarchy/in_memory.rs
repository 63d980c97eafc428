//! In-memory organization hierarchy for testing and simple deployments.

use crate::hierarchy::OrganizationHierarchy;
use crate::model::{OrganizationId, TenantDomain};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct OrganizationRecord {
    name: Option<String>,
    tenant_domain: Option<TenantDomain>,
    ancestors: Vec<OrganizationId>,
}

#[derive(Debug, Default)]
struct HierarchyState {
    organizations: HashMap<OrganizationId, OrganizationRecord>,
    // fault injection for exercising server-error paths
    tenant_faults: HashSet<OrganizationId>,
    ancestor_faults: HashSet<OrganizationId>,
}

/// In-memory [`OrganizationHierarchy`] implementation.
///
/// Suitable for tests and small static deployments. Organizations are
/// registered with their full ancestor chain (nearest first); the resolver
/// consumes the chain exactly as registered.
///
/// # Example Usage
///
/// ```rust
/// use org_resolver::hierarchy::InMemoryHierarchy;
/// use org_resolver::{OrganizationId, TenantDomain};
///
/// # async fn example() {
/// let hierarchy = InMemoryHierarchy::new();
/// hierarchy
///     .add_organization(
///         OrganizationId::new("org-a"),
///         "Org A",
///         Some(TenantDomain::new("tenant-a")),
///         vec![OrganizationId::new("org-root")],
///     )
///     .await;
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHierarchy {
    state: Arc<RwLock<HierarchyState>>,
}

impl InMemoryHierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an organization with its display name, tenant domain, and
    /// ancestor chain (nearest ancestor first, root last).
    ///
    /// A `None` tenant domain models an organization without a provisioned
    /// identity directory; walks skip it.
    pub async fn add_organization(
        &self,
        organization_id: OrganizationId,
        name: impl Into<String>,
        tenant_domain: Option<TenantDomain>,
        ancestors: Vec<OrganizationId>,
    ) {
        let mut state = self.state.write().await;
        state.organizations.insert(
            organization_id,
            OrganizationRecord {
                name: Some(name.into()),
                tenant_domain,
                ancestors,
            },
        );
    }

    /// Drop the display name of an organization, keeping the rest of its
    /// record. Name lookups then report absence.
    pub async fn clear_display_name(&self, organization_id: &OrganizationId) {
        let mut state = self.state.write().await;
        if let Some(record) = state.organizations.get_mut(organization_id) {
            record.name = None;
        }
    }

    /// Make subsequent tenant-domain lookups for this organization fail.
    pub async fn fail_tenant_resolution_for(&self, organization_id: OrganizationId) {
        let mut state = self.state.write().await;
        state.tenant_faults.insert(organization_id);
    }

    /// Make subsequent ancestor listings for this organization fail.
    pub async fn fail_ancestor_listing_for(&self, organization_id: OrganizationId) {
        let mut state = self.state.write().await;
        state.ancestor_faults.insert(organization_id);
    }

    /// Number of registered organizations.
    pub async fn organization_count(&self) -> usize {
        self.state.read().await.organizations.len()
    }
}

/// Error type for the in-memory hierarchy.
#[derive(Debug, thiserror::Error)]
pub enum InMemoryHierarchyError {
    /// A fault injected through the `fail_*` methods.
    #[error("injected hierarchy fault for organization '{organization_id}'")]
    InjectedFault { organization_id: OrganizationId },
}

impl OrganizationHierarchy for InMemoryHierarchy {
    type Error = InMemoryHierarchyError;

    async fn ancestor_organization_ids(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Option<Vec<OrganizationId>>, Self::Error> {
        let state = self.state.read().await;
        if state.ancestor_faults.contains(organization_id) {
            return Err(InMemoryHierarchyError::InjectedFault {
                organization_id: organization_id.clone(),
            });
        }
        Ok(state
            .organizations
            .get(organization_id)
            .map(|record| record.ancestors.clone()))
    }

    async fn organization_name_by_id(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Option<String>, Self::Error> {
        let state = self.state.read().await;
        Ok(state
            .organizations
            .get(organization_id)
            .and_then(|record| record.name.clone()))
    }

    async fn resolve_tenant_domain(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Option<TenantDomain>, Self::Error> {
        let state = self.state.read().await;
        if state.tenant_faults.contains(organization_id) {
            return Err(InMemoryHierarchyError::InjectedFault {
                organization_id: organization_id.clone(),
            });
        }
        Ok(state
            .organizations
            .get(organization_id)
            .and_then(|record| record.tenant_domain.clone()))
    }
}

/// Builder for assembling an [`InMemoryHierarchy`] from a fixed set of
/// organizations.
///
/// # Example
/// ```rust
/// use org_resolver::hierarchy::InMemoryHierarchyBuilder;
/// use org_resolver::{OrganizationId, TenantDomain};
///
/// # async fn example() {
/// let hierarchy = InMemoryHierarchyBuilder::new()
///     .with_organization(
///         OrganizationId::new("org-root"),
///         "Root",
///         Some(TenantDomain::new("super")),
///         vec![],
///     )
///     .with_organization(
///         OrganizationId::new("org-a"),
///         "Org A",
///         Some(TenantDomain::new("tenant-a")),
///         vec![OrganizationId::new("org-root")],
///     )
///     .build()
///     .await;
/// # }
/// ```
#[derive(Default)]
pub struct InMemoryHierarchyBuilder {
    organizations: Vec<(
        OrganizationId,
        String,
        Option<TenantDomain>,
        Vec<OrganizationId>,
    )>,
}

impl InMemoryHierarchyBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an organization to the builder.
    pub fn with_organization(
        mut self,
        organization_id: OrganizationId,
        name: impl Into<String>,
        tenant_domain: Option<TenantDomain>,
        ancestors: Vec<OrganizationId>,
    ) -> Self {
        self.organizations
            .push((organization_id, name.into(), tenant_domain, ancestors));
        self
    }

    /// Build the hierarchy with all registered organizations.
    pub async fn build(self) -> InMemoryHierarchy {
        let hierarchy = InMemoryHierarchy::new();
        for (organization_id, name, tenant_domain, ancestors) in self.organizations {
            hierarchy
                .add_organization(organization_id, name, tenant_domain, ancestors)
                .await;
        }
        hierarchy
    }
}
