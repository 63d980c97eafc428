//! In-memory identity directory for testing and simple deployments.

use crate::directory::name;
use crate::directory::provider::{DirectoryProvider, IdentityDirectory, SecondaryUserStore};
use crate::model::{TenantDomain, UserIdentity};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug)]
struct UserStoreData {
    domain_name: String,
    users: Vec<UserIdentity>,
}

#[derive(Debug)]
struct DirectoryState {
    // index 0 is the primary store; the rest form the secondary chain in
    // registration order
    stores: Vec<UserStoreData>,
    poisoned: bool,
}

/// Error type for the in-memory directory.
#[derive(Debug, thiserror::Error)]
pub enum InMemoryDirectoryError {
    /// A fetch addressed a user that does not exist.
    #[error("user '{user}' not found in directory")]
    UserNotFound { user: String },

    /// A user was added to a store domain that is not configured.
    #[error("user store domain '{domain_name}' is not configured")]
    UnknownStore { domain_name: String },

    /// A fault injected through [`InMemoryDirectory::inject_fault`].
    #[error("injected directory fault")]
    InjectedFault,
}

/// In-memory [`IdentityDirectory`] implementation.
///
/// Holds a primary user store and any number of secondary stores. Useful
/// for tests and proof-of-concept deployments; production directories are
/// expected to wrap a real user store behind the same trait.
///
/// # Example Usage
///
/// ```rust
/// use org_resolver::directory::InMemoryDirectory;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let directory = InMemoryDirectory::new("PRIMARY");
/// directory.add_secondary_store("LDAP").await;
///
/// let alice = directory.add_user("PRIMARY", "alice").await?;
/// let bob = directory.add_user("LDAP", "bob").await?;
/// assert_ne!(alice.id, bob.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

impl InMemoryDirectory {
    /// Create a directory with the given primary store domain.
    pub fn new(primary_domain: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(DirectoryState {
                stores: vec![UserStoreData {
                    domain_name: primary_domain.into(),
                    users: Vec::new(),
                }],
                poisoned: false,
            })),
        }
    }

    /// Append a secondary store to the end of the chain.
    pub async fn add_secondary_store(&self, domain_name: impl Into<String>) {
        let mut state = self.state.write().await;
        state.stores.push(UserStoreData {
            domain_name: domain_name.into(),
            users: Vec::new(),
        });
    }

    /// Add a user to the named store, generating a fresh internal id.
    pub async fn add_user(
        &self,
        store_domain: &str,
        user_name: &str,
    ) -> Result<UserIdentity, InMemoryDirectoryError> {
        self.add_user_with_id(store_domain, user_name, uuid::Uuid::new_v4().to_string())
            .await
    }

    /// Add a user with a caller-chosen internal id.
    pub async fn add_user_with_id(
        &self,
        store_domain: &str,
        user_name: &str,
        user_id: impl Into<String>,
    ) -> Result<UserIdentity, InMemoryDirectoryError> {
        let mut state = self.state.write().await;
        let store = state
            .stores
            .iter_mut()
            .find(|store| store.domain_name.eq_ignore_ascii_case(store_domain))
            .ok_or_else(|| InMemoryDirectoryError::UnknownStore {
                domain_name: store_domain.to_string(),
            })?;
        let user = UserIdentity::new(user_id, user_name, store.domain_name.clone());
        store.users.push(user.clone());
        Ok(user)
    }

    /// Make every subsequent directory operation fail.
    pub async fn inject_fault(&self) {
        self.state.write().await.poisoned = true;
    }

    fn check(state: &DirectoryState) -> Result<(), InMemoryDirectoryError> {
        if state.poisoned {
            Err(InMemoryDirectoryError::InjectedFault)
        } else {
            Ok(())
        }
    }

    /// Find the store addressed by a possibly qualified name, and the bare
    /// username within it. Unqualified names address the primary store.
    fn target_store<'a>(
        state: &'a DirectoryState,
        qualified: &'a str,
    ) -> (Option<&'a UserStoreData>, &'a str) {
        let bare = name::strip_domain(qualified);
        let store = match name::domain_of(qualified) {
            Some(domain) => state
                .stores
                .iter()
                .find(|store| store.domain_name.eq_ignore_ascii_case(domain)),
            None => state.stores.first(),
        };
        (store, bare)
    }
}

impl IdentityDirectory for InMemoryDirectory {
    type Error = InMemoryDirectoryError;

    async fn user_exists_by_id(&self, user_id: &str) -> Result<bool, Self::Error> {
        let state = self.state.read().await;
        Self::check(&state)?;
        Ok(state
            .stores
            .iter()
            .flat_map(|store| store.users.iter())
            .any(|user| user.id == user_id))
    }

    async fn user_exists_by_name(&self, name: &str) -> Result<bool, Self::Error> {
        let state = self.state.read().await;
        Self::check(&state)?;
        let (store, bare) = Self::target_store(&state, name);
        Ok(store
            .map(|store| store.users.iter().any(|user| user.user_name == bare))
            .unwrap_or(false))
    }

    async fn user_by_id(&self, user_id: &str) -> Result<UserIdentity, Self::Error> {
        let state = self.state.read().await;
        Self::check(&state)?;
        state
            .stores
            .iter()
            .flat_map(|store| store.users.iter())
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(|| InMemoryDirectoryError::UserNotFound {
                user: user_id.to_string(),
            })
    }

    async fn user_by_name(&self, name: &str) -> Result<UserIdentity, Self::Error> {
        let state = self.state.read().await;
        Self::check(&state)?;
        let (store, bare) = Self::target_store(&state, name);
        store
            .and_then(|store| store.users.iter().find(|user| user.user_name == bare))
            .cloned()
            .ok_or_else(|| InMemoryDirectoryError::UserNotFound {
                user: name.to_string(),
            })
    }

    async fn secondary_store_chain(&self) -> Result<Vec<SecondaryUserStore>, Self::Error> {
        let state = self.state.read().await;
        Self::check(&state)?;
        Ok(state
            .stores
            .iter()
            .skip(1)
            .map(|store| SecondaryUserStore::new(store.domain_name.clone()))
            .collect())
    }
}

/// Error type for the in-memory directory provider.
#[derive(Debug, thiserror::Error)]
pub enum InMemoryProviderError {
    /// No directory is provisioned for the tenant domain.
    #[error("no identity directory provisioned for tenant domain '{tenant_domain}'")]
    TenantNotProvisioned { tenant_domain: TenantDomain },
}

/// In-memory [`DirectoryProvider`] mapping tenant domains to directories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectoryProvider {
    directories: Arc<RwLock<HashMap<TenantDomain, InMemoryDirectory>>>,
}

impl InMemoryDirectoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and register a directory for a tenant domain, returning a
    /// handle for populating it.
    pub async fn provision(
        &self,
        tenant_domain: TenantDomain,
        primary_domain: impl Into<String>,
    ) -> InMemoryDirectory {
        let directory = InMemoryDirectory::new(primary_domain);
        self.add_directory(tenant_domain, directory.clone()).await;
        directory
    }

    /// Register an existing directory for a tenant domain.
    pub async fn add_directory(&self, tenant_domain: TenantDomain, directory: InMemoryDirectory) {
        let mut directories = self.directories.write().await;
        directories.insert(tenant_domain, directory);
    }

    /// Number of provisioned tenants.
    pub async fn tenant_count(&self) -> usize {
        self.directories.read().await.len()
    }
}

impl DirectoryProvider for InMemoryDirectoryProvider {
    type Error = InMemoryProviderError;
    type Directory = InMemoryDirectory;

    async fn directory_for(
        &self,
        tenant_domain: &TenantDomain,
    ) -> Result<Self::Directory, Self::Error> {
        let directories = self.directories.read().await;
        directories
            .get(tenant_domain)
            .cloned()
            .ok_or_else(|| InMemoryProviderError::TenantNotProvisioned {
                tenant_domain: tenant_domain.clone(),
            })
    }
}
