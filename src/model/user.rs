//! Resolved user record.

use serde::{Deserialize, Serialize};

/// A user record resolved from an identity directory.
///
/// Only directory implementations construct these; the resolver forwards
/// them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Internal user identifier, unique within the directory.
    pub id: String,
    /// Bare username, without a domain qualifier.
    pub user_name: String,
    /// Domain name of the user store that owns the record.
    pub store_domain: String,
}

impl UserIdentity {
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        store_domain: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            store_domain: store_domain.into(),
        }
    }

    /// Domain-qualified form of the username.
    pub fn qualified_name(&self) -> String {
        crate::directory::name::qualify(&self.store_domain, &self.user_name)
    }
}
