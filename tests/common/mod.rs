//! Shared fixtures for resolver integration tests.
#![allow(dead_code)]

use org_resolver::directory::{InMemoryDirectory, InMemoryDirectoryProvider};
use org_resolver::hierarchy::InMemoryHierarchy;
use org_resolver::{OrganizationId, ResidentResolver, TenantDomain};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn org(id: &str) -> OrganizationId {
    OrganizationId::new(id)
}

pub fn tenant_of(org_id: &str) -> TenantDomain {
    TenantDomain::new(format!("tenant-{org_id}"))
}

/// An organization tree plus per-tenant directories, built up per test.
pub struct Fixture {
    pub hierarchy: InMemoryHierarchy,
    pub directories: InMemoryDirectoryProvider,
}

impl Fixture {
    pub fn new() -> Self {
        init_logging();
        Self {
            hierarchy: InMemoryHierarchy::new(),
            directories: InMemoryDirectoryProvider::new(),
        }
    }

    /// Register an ancestor organization named after its id, mapped to
    /// tenant `tenant-<id>`, with a provisioned directory whose primary
    /// store is `PRIMARY`. Returns the directory handle for populating.
    pub async fn add_ancestor(&self, org_id: &str) -> InMemoryDirectory {
        self.hierarchy
            .add_organization(org(org_id), org_id, Some(tenant_of(org_id)), vec![])
            .await;
        self.directories
            .provision(tenant_of(org_id), "PRIMARY")
            .await
    }

    /// Register an ancestor organization that has no tenant domain; walks
    /// must skip it.
    pub async fn add_tenantless_ancestor(&self, org_id: &str) {
        self.hierarchy
            .add_organization(org(org_id), org_id, None, vec![])
            .await;
    }

    /// Register the accessed organization with its ancestor chain (nearest
    /// ancestor first).
    pub async fn set_accessed(&self, accessed_id: &str, chain: &[&str]) {
        let ancestors = chain.iter().map(|id| org(id)).collect();
        self.hierarchy
            .add_organization(org(accessed_id), accessed_id, None, ancestors)
            .await;
    }

    pub fn resolver(&self) -> ResidentResolver<InMemoryHierarchy, InMemoryDirectoryProvider> {
        ResidentResolver::new(self.hierarchy.clone(), self.directories.clone())
    }
}
