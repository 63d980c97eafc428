//! Identity directory access.
//!
//! One directory per tenant domain, obtained through a [`DirectoryProvider`].
//! The resolver exercises only the read capabilities declared on
//! [`IdentityDirectory`]; store contents and their persistence live behind
//! the trait.

pub mod in_memory;
pub mod name;
pub mod provider;

pub use in_memory::{
    InMemoryDirectory, InMemoryDirectoryError, InMemoryDirectoryProvider, InMemoryProviderError,
};
pub use name::DOMAIN_SEPARATOR;
pub use provider::{DirectoryProvider, IdentityDirectory, SecondaryUserStore};
