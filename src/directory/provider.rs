//! Identity directory collaborator traits.
//!
//! Each tenant domain hosts one identity directory. A directory owns a
//! primary user store and a finite, ordered chain of secondary stores, each
//! identified by a domain name. The resolver only probes and fetches; it
//! never mutates directory contents.

use crate::model::{TenantDomain, UserIdentity};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Descriptor of one secondary user store in a directory's chain.
///
/// The chain is a finite sequence in link order; iterating the returned
/// `Vec` once per lookup is the whole traversal, so pathological cyclic
/// configurations cannot occur at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryUserStore {
    /// Configured domain name of the store.
    pub domain_name: String,
}

impl SecondaryUserStore {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
        }
    }
}

/// Read access to one tenant's identity directory.
///
/// Name-based operations take the domain-qualified form (`DOMAIN/name`);
/// an unqualified name addresses the primary store. Existence checks
/// report absence as `Ok(false)`, while the fetch operations treat a
/// missing user as a collaborator error.
pub trait IdentityDirectory: Send + Sync {
    /// Error type for directory access failures.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Check whether a user with the given internal id exists in any store.
    fn user_exists_by_id(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Check whether a user with the given (possibly qualified) name exists.
    fn user_exists_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Fetch a user record by internal id.
    fn user_by_id(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<UserIdentity, Self::Error>> + Send;

    /// Fetch a user record by (possibly qualified) name.
    fn user_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<UserIdentity, Self::Error>> + Send;

    /// List the secondary user stores in link order.
    fn secondary_store_chain(
        &self,
    ) -> impl Future<Output = Result<Vec<SecondaryUserStore>, Self::Error>> + Send;

    /// Check whether a secondary store with the given domain name is
    /// configured. Domain names compare case-insensitively.
    fn has_secondary_store(
        &self,
        domain_name: &str,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        async move {
            let chain = self.secondary_store_chain().await?;
            Ok(chain
                .iter()
                .any(|store| store.domain_name.eq_ignore_ascii_case(domain_name)))
        }
    }
}

/// Factory handing out per-tenant directory handles.
///
/// Handles are scoped to the current resolution call; the resolver never
/// retains one across calls.
pub trait DirectoryProvider: Send + Sync {
    /// Error type for provisioning failures.
    type Error: std::error::Error + Send + Sync + 'static;
    /// Directory handle type produced by this provider.
    type Directory: IdentityDirectory;

    /// Obtain the directory for a tenant domain.
    ///
    /// Fails when the tenant is not provisioned; this is a collaborator
    /// error, not an absence.
    fn directory_for(
        &self,
        tenant_domain: &TenantDomain,
    ) -> impl Future<Output = Result<Self::Directory, Self::Error>> + Send;
}
