//! Organization and tenant identifier types.
//!
//! These are opaque string newtypes: the resolver never interprets their
//! contents beyond equality checks, and the collaborators own their format.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of an organization in the hierarchy.
///
/// One reserved value denotes the root (super) organization; see
/// [`RootMapping`](crate::tenant::RootMapping).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    /// Wrap a raw identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the string representation of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the identifier.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrganizationId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for OrganizationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Opaque name of the tenant domain hosting an identity directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantDomain(String);

impl TenantDomain {
    /// Wrap a raw tenant domain name.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the string representation of the tenant domain.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the tenant domain.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TenantDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantDomain {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TenantDomain {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Lightweight projection of one organization on a hierarchy path.
///
/// Built during the ancestor walk and returned to the caller; never
/// persisted by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicOrganization {
    /// The organization identifier.
    pub id: OrganizationId,
    /// Display name, as recorded by the hierarchy collaborator.
    pub name: String,
    /// Tenant domain hosting the organization's identity directory.
    pub organization_handle: TenantDomain,
}

impl BasicOrganization {
    /// Assemble a projection entry.
    pub fn new(
        id: OrganizationId,
        name: impl Into<String>,
        organization_handle: TenantDomain,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            organization_handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn organization_id_is_transparent_in_serde() {
        let id = OrganizationId::new("org-123");
        let value = serde_json::to_value(&id).unwrap();
        assert_eq!(value, json!("org-123"));

        let back: OrganizationId = serde_json::from_value(value).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn basic_organization_serializes_as_projection() {
        let org = BasicOrganization::new(
            OrganizationId::new("org-a"),
            "Org A",
            TenantDomain::new("tenant-a"),
        );
        let value = serde_json::to_value(&org).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "org-a",
                "name": "Org A",
                "organization_handle": "tenant-a",
            })
        );
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(OrganizationId::new("abc").to_string(), "abc");
        assert_eq!(TenantDomain::new("tenant").to_string(), "tenant");
    }
}
