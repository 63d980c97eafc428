//! Domain-qualified username handling.
//!
//! Usernames may carry a user-store domain prefix in the form
//! `DOMAIN/name`. An unqualified name implicitly addresses the directory's
//! primary store.

/// Separator between a user-store domain and the bare username.
pub const DOMAIN_SEPARATOR: char = '/';

/// Extract the domain prefix of a username, if it is domain-qualified.
pub fn domain_of(name: &str) -> Option<&str> {
    name.split_once(DOMAIN_SEPARATOR)
        .map(|(domain, _)| domain)
        .filter(|domain| !domain.is_empty())
}

/// Strip any domain prefix, returning the bare username.
pub fn strip_domain(name: &str) -> &str {
    match name.split_once(DOMAIN_SEPARATOR) {
        Some((_, bare)) => bare,
        None => name,
    }
}

/// Join a domain and a bare username into the qualified form.
pub fn qualify(domain: &str, name: &str) -> String {
    format!("{domain}{DOMAIN_SEPARATOR}{name}")
}
