//! Error types for organization resolution.
//!
//! Errors fall into two tiers: client errors (the caller supplied
//! insufficient input) and server errors (a collaborator failed during the
//! walk). Absence of a result is never an error; the operations return
//! `Ok(None)` or an empty list for a clean "not found".

use crate::model::OrganizationId;

/// Boxed collaborator error carried as a cause.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for all resolution operations.
#[derive(Debug, thiserror::Error)]
pub enum OrgResolverError {
    /// Neither a username nor a user id was supplied.
    #[error("a username or user id is required to resolve a user from a resident organization")]
    MissingUserNameAndId,

    /// Tenant-domain resolution failed for an organization.
    #[error("failed to resolve tenant domain for organization '{organization_id}'")]
    TenantResolution {
        organization_id: OrganizationId,
        #[source]
        source: BoxError,
    },

    /// The hierarchy collaborator failed during ancestor listing or name lookup.
    #[error("organization hierarchy access failed for '{organization_id}'")]
    HierarchyAccess {
        organization_id: OrganizationId,
        #[source]
        source: BoxError,
    },

    /// Directory access failed while resolving a user's resident organization.
    #[error("failed to resolve the resident organization of user '{user_id}'")]
    ResidentResolution {
        user_id: String,
        #[source]
        source: BoxError,
    },

    /// A collaborator failed while resolving a user from its resident organization.
    #[error(
        "failed to resolve user '{user_name}' from the resident organization of '{accessed_organization_id}'"
    )]
    UserFromResidentOrg {
        user_name: String,
        accessed_organization_id: OrganizationId,
        #[source]
        source: BoxError,
    },

    /// A collaborator failed while fetching a user in a known resident organization.
    #[error("failed to resolve user '{user_id}' in resident organization '{resident_organization_id}'")]
    UserInResidentOrg {
        user_id: String,
        resident_organization_id: OrganizationId,
        #[source]
        source: BoxError,
    },
}

impl OrgResolverError {
    /// True for errors caused by insufficient caller input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingUserNameAndId)
    }

    /// True for collaborator failures surfaced during a walk.
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }

    /// Wrap a tenant-domain resolution failure.
    pub fn tenant_resolution(
        organization_id: OrganizationId,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::TenantResolution {
            organization_id,
            source: source.into(),
        }
    }

    /// Wrap a hierarchy collaborator failure.
    pub fn hierarchy_access(organization_id: OrganizationId, source: impl Into<BoxError>) -> Self {
        Self::HierarchyAccess {
            organization_id,
            source: source.into(),
        }
    }

    /// Wrap a directory failure during resident-organization resolution.
    pub fn resident_resolution(user_id: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ResidentResolution {
            user_id: user_id.into(),
            source: source.into(),
        }
    }

    /// Wrap a collaborator failure during user-from-resident resolution.
    pub fn user_from_resident_org(
        user_name: impl Into<String>,
        accessed_organization_id: OrganizationId,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::UserFromResidentOrg {
            user_name: user_name.into(),
            accessed_organization_id,
            source: source.into(),
        }
    }

    /// Wrap a collaborator failure during username lookup in a resident organization.
    pub fn user_in_resident_org(
        user_id: impl Into<String>,
        resident_organization_id: OrganizationId,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::UserInResidentOrg {
            user_id: user_id.into(),
            resident_organization_id,
            source: source.into(),
        }
    }
}

/// Result alias for resolution operations.
pub type OrgResolverResult<T> = Result<T, OrgResolverError>;
