//! Core data types shared across the resolver and its collaborator traits.

pub mod organization;
pub mod user;

pub use organization::{BasicOrganization, OrganizationId, TenantDomain};
pub use user::UserIdentity;
