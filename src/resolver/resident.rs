//! Resident-organization resolution.
//!
//! All four public operations share the same walk: fetch the ancestor chain
//! of the accessed organization once, then visit the ancestors in chain
//! order (nearest first, root last), resolving each one's tenant domain and
//! probing its identity directory.

use crate::directory::{name, DirectoryProvider, IdentityDirectory};
use crate::error::{BoxError, OrgResolverError, OrgResolverResult};
use crate::hierarchy::OrganizationHierarchy;
use crate::model::{BasicOrganization, OrganizationId, UserIdentity};
use crate::tenant::{RootMapping, TenantDomainResolver};
use log::{debug, trace, warn};
use std::collections::HashSet;

/// Resolves which organization a user identity resides in, relative to an
/// accessed organization.
///
/// Holds no state of its own between calls; every operation re-walks the
/// ancestor chain from scratch, so concurrent invocations need no
/// coordination.
///
/// # Example Usage
///
/// ```rust
/// use org_resolver::ResidentResolver;
/// use org_resolver::hierarchy::InMemoryHierarchy;
/// use org_resolver::directory::InMemoryDirectoryProvider;
/// use org_resolver::{OrganizationId, TenantDomain};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hierarchy = InMemoryHierarchy::new();
/// hierarchy
///     .add_organization(
///         OrganizationId::new("org-leaf"),
///         "Leaf",
///         Some(TenantDomain::new("tenant-leaf")),
///         vec![OrganizationId::new("org-a")],
///     )
///     .await;
/// hierarchy
///     .add_organization(
///         OrganizationId::new("org-a"),
///         "Org A",
///         Some(TenantDomain::new("tenant-a")),
///         vec![],
///     )
///     .await;
///
/// let directories = InMemoryDirectoryProvider::new();
/// let tenant_a = directories
///     .provision(TenantDomain::new("tenant-a"), "PRIMARY")
///     .await;
/// let alice = tenant_a.add_user("PRIMARY", "alice").await?;
///
/// let resolver = ResidentResolver::new(hierarchy, directories);
/// let resident = resolver
///     .resolve_resident_organization(&alice.id, &OrganizationId::new("org-leaf"))
///     .await?;
/// assert_eq!(resident, Some(OrganizationId::new("org-a")));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ResidentResolver<H, P> {
    hierarchy: H,
    directories: P,
    root: RootMapping,
}

impl<H, P> ResidentResolver<H, P>
where
    H: OrganizationHierarchy,
    P: DirectoryProvider,
{
    /// Create a resolver over the given collaborators with the default
    /// [`RootMapping`].
    pub fn new(hierarchy: H, directories: P) -> Self {
        Self {
            hierarchy,
            directories,
            root: RootMapping::default(),
        }
    }

    /// Replace the root mapping.
    pub fn with_root_mapping(mut self, root: RootMapping) -> Self {
        self.root = root;
        self
    }

    /// The configured root mapping.
    pub fn root_mapping(&self) -> &RootMapping {
        &self.root
    }

    fn tenant_resolver(&self) -> TenantDomainResolver<'_, H> {
        TenantDomainResolver::new(&self.hierarchy, &self.root)
    }

    async fn ancestor_chain(
        &self,
        organization_id: &OrganizationId,
    ) -> OrgResolverResult<Option<Vec<OrganizationId>>> {
        self.hierarchy
            .ancestor_organization_ids(organization_id)
            .await
            .map_err(|e| OrgResolverError::hierarchy_access(organization_id.clone(), e))
    }

    /// Resolve the resident organization of a user relative to an accessed
    /// organization.
    ///
    /// Walks every ancestor of the accessed organization and records each
    /// one whose directory knows the user id. The scan deliberately
    /// continues past a match: deployments with overlapping user-store
    /// configuration can have several directories claim the same id, and
    /// the last matching ancestor in chain order is the one reported.
    ///
    /// Returns `Ok(None)` when the accessed organization has no ancestor
    /// chain or no ancestor's directory knows the user.
    pub async fn resolve_resident_organization(
        &self,
        user_id: &str,
        accessed_organization_id: &OrganizationId,
    ) -> OrgResolverResult<Option<OrganizationId>> {
        debug!("resolving resident organization of user '{user_id}' accessed via '{accessed_organization_id}'");
        let Some(ancestors) = self.ancestor_chain(accessed_organization_id).await? else {
            return Ok(None);
        };
        let tenant_resolver = self.tenant_resolver();
        let mut resident: Option<OrganizationId> = None;
        for organization_id in &ancestors {
            let Some(tenant_domain) = tenant_resolver.resolve(organization_id).await? else {
                trace!("no tenant domain for organization '{organization_id}', skipping");
                continue;
            };
            let directory = self
                .directories
                .directory_for(&tenant_domain)
                .await
                .map_err(|e| OrgResolverError::resident_resolution(user_id, e))?;
            if directory
                .user_exists_by_id(user_id)
                .await
                .map_err(|e| OrgResolverError::resident_resolution(user_id, e))?
            {
                debug!("user '{user_id}' found in tenant '{tenant_domain}' (organization '{organization_id}')");
                resident = Some(organization_id.clone());
            }
        }
        Ok(resident)
    }

    /// Resolve a user record from its resident organization by username
    /// and/or user id.
    ///
    /// At least one of `user_name` / `user_id` must be non-blank; otherwise
    /// the client error [`OrgResolverError::MissingUserNameAndId`] is
    /// returned before any collaborator call. Unlike
    /// [`resolve_resident_organization`](Self::resolve_resident_organization),
    /// this walk stops at the first ancestor that yields a record.
    ///
    /// Per ancestor, the first satisfied strategy wins:
    /// 1. a domain-qualified `user_name` whose domain names a configured
    ///    secondary store and which exists by name;
    /// 2. a `user_id` that exists in the directory;
    /// 3. an unqualified `user_name` probed through the secondary-store
    ///    chain in link order.
    pub async fn resolve_user_from_resident_organization(
        &self,
        user_name: Option<&str>,
        user_id: Option<&str>,
        accessed_organization_id: &OrganizationId,
    ) -> OrgResolverResult<Option<UserIdentity>> {
        let user_name = non_blank(user_name);
        let user_id = non_blank(user_id);
        if user_name.is_none() && user_id.is_none() {
            return Err(OrgResolverError::MissingUserNameAndId);
        }
        debug!(
            "resolving user (name: {user_name:?}, id: {user_id:?}) from the resident organization of '{accessed_organization_id}'"
        );
        self.user_walk(user_name, user_id, accessed_organization_id)
            .await
            .map_err(|e| {
                OrgResolverError::user_from_resident_org(
                    user_name.unwrap_or_default(),
                    accessed_organization_id.clone(),
                    e,
                )
            })
    }

    async fn user_walk(
        &self,
        user_name: Option<&str>,
        user_id: Option<&str>,
        accessed_organization_id: &OrganizationId,
    ) -> Result<Option<UserIdentity>, BoxError> {
        let requested_domain = user_name.and_then(name::domain_of);
        let Some(ancestors) = self.ancestor_chain(accessed_organization_id).await? else {
            return Ok(None);
        };
        let tenant_resolver = self.tenant_resolver();
        for organization_id in &ancestors {
            let Some(tenant_domain) = tenant_resolver.resolve(organization_id).await? else {
                trace!("no tenant domain for organization '{organization_id}', skipping");
                continue;
            };
            let directory = self.directories.directory_for(&tenant_domain).await?;

            if let (Some(user_name), Some(domain)) = (user_name, requested_domain) {
                if directory.has_secondary_store(domain).await?
                    && directory.user_exists_by_name(user_name).await?
                {
                    debug!("matched qualified name '{user_name}' in tenant '{tenant_domain}'");
                    return Ok(Some(directory.user_by_name(user_name).await?));
                }
            }
            if let Some(user_id) = user_id {
                if directory.user_exists_by_id(user_id).await? {
                    debug!("matched user id '{user_id}' in tenant '{tenant_domain}'");
                    return Ok(Some(directory.user_by_id(user_id).await?));
                }
            }
            if let Some(user_name) = user_name {
                if name::strip_domain(user_name) == user_name {
                    // Unqualified name: probe the secondary stores in link
                    // order under each store's own domain.
                    let mut visited = HashSet::new();
                    for store in directory.secondary_store_chain().await? {
                        if !visited.insert(store.domain_name.to_ascii_uppercase()) {
                            warn!(
                                "duplicate secondary store domain '{}' in tenant '{tenant_domain}', skipping",
                                store.domain_name
                            );
                            continue;
                        }
                        let qualified = name::qualify(&store.domain_name, user_name);
                        if directory.user_exists_by_name(&qualified).await? {
                            debug!("matched '{qualified}' in tenant '{tenant_domain}'");
                            return Ok(Some(directory.user_by_name(&qualified).await?));
                        }
                    }
                }
            }
        }
        Ok(None)
    }

    /// Build the organization path from the user's resident organization
    /// down to the nearest ancestor of the accessed organization.
    ///
    /// Tracks the resident organization exactly as
    /// [`resolve_resident_organization`](Self::resolve_resident_organization)
    /// does (last match wins) while projecting every tenant-resolvable
    /// ancestor with a known display name. The result starts at the
    /// resident organization and ends nearest the accessed organization;
    /// the accessed organization itself is never included. Empty when no
    /// resident organization was found.
    pub async fn hierarchy_up_to_resident_organization(
        &self,
        user_id: &str,
        accessed_organization_id: &OrganizationId,
    ) -> OrgResolverResult<Vec<BasicOrganization>> {
        debug!(
            "building hierarchy up to the resident organization of user '{user_id}' from '{accessed_organization_id}'"
        );
        let Some(ancestors) = self.ancestor_chain(accessed_organization_id).await? else {
            return Ok(Vec::new());
        };
        let tenant_resolver = self.tenant_resolver();
        let mut projection: Vec<BasicOrganization> = Vec::new();
        let mut resident: Option<OrganizationId> = None;
        for organization_id in &ancestors {
            let Some(tenant_domain) = tenant_resolver.resolve(organization_id).await? else {
                trace!("no tenant domain for organization '{organization_id}', skipping");
                continue;
            };
            if let Some(org_name) = self
                .hierarchy
                .organization_name_by_id(organization_id)
                .await
                .map_err(|e| OrgResolverError::hierarchy_access(organization_id.clone(), e))?
            {
                projection.push(BasicOrganization::new(
                    organization_id.clone(),
                    org_name,
                    tenant_domain.clone(),
                ));
            }
            let directory = self
                .directories
                .directory_for(&tenant_domain)
                .await
                .map_err(|e| OrgResolverError::resident_resolution(user_id, e))?;
            if directory
                .user_exists_by_id(user_id)
                .await
                .map_err(|e| OrgResolverError::resident_resolution(user_id, e))?
            {
                // same last-match-wins policy as resolve_resident_organization
                resident = Some(organization_id.clone());
            }
        }
        let Some(resident) = resident else {
            return Ok(Vec::new());
        };
        // The resident organization's name may have been unresolvable, in
        // which case it never entered the projection and the path is empty.
        let Some(position) = projection.iter().position(|org| org.id == resident) else {
            return Ok(Vec::new());
        };
        projection.truncate(position + 1);
        projection.reverse();
        Ok(projection)
    }

    /// Look up the username of a user known to reside in the given
    /// organization.
    ///
    /// Returns `Ok(None)` when the resident organization has no tenant
    /// domain. A missing user is a directory-level failure and surfaces as
    /// [`OrgResolverError::UserInResidentOrg`].
    pub async fn user_name_from_resident_org(
        &self,
        user_id: &str,
        resident_organization_id: &OrganizationId,
    ) -> OrgResolverResult<Option<String>> {
        debug!("resolving username of user '{user_id}' in resident organization '{resident_organization_id}'");
        self.user_name_lookup(user_id, resident_organization_id)
            .await
            .map_err(|e| {
                OrgResolverError::user_in_resident_org(
                    user_id,
                    resident_organization_id.clone(),
                    e,
                )
            })
    }

    async fn user_name_lookup(
        &self,
        user_id: &str,
        resident_organization_id: &OrganizationId,
    ) -> Result<Option<String>, BoxError> {
        let Some(tenant_domain) = self
            .tenant_resolver()
            .resolve(resident_organization_id)
            .await?
        else {
            return Ok(None);
        };
        let directory = self.directories.directory_for(&tenant_domain).await?;
        let user = directory.user_by_id(user_id).await?;
        Ok(Some(user.user_name))
    }
}

/// Treat empty and whitespace-only parameters as absent.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
