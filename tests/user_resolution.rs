//! Integration tests for resolving a user record from its resident
//! organization.

mod common;

use common::{org, Fixture};
use org_resolver::OrgResolverError;

#[tokio::test]
async fn missing_username_and_id_is_a_client_error() {
    let fixture = Fixture::new();
    let resolver = fixture.resolver();

    // the accessed organization does not even need to exist
    let err = resolver
        .resolve_user_from_resident_organization(None, None, &org("org-any"))
        .await
        .unwrap_err();
    assert!(matches!(err, OrgResolverError::MissingUserNameAndId));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn whitespace_only_parameters_count_as_missing() {
    let fixture = Fixture::new();
    let err = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("   "), Some(""), &org("org-any"))
        .await
        .unwrap_err();
    assert!(matches!(err, OrgResolverError::MissingUserNameAndId));
}

#[tokio::test]
async fn unknown_accessed_organization_resolves_to_none() {
    let fixture = Fixture::new();
    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("alice"), None, &org("org-unknown"))
        .await
        .unwrap();
    assert_eq!(resolved, None);
}

#[tokio::test]
async fn first_matching_ancestor_wins_for_user_lookup() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    let dir_b = fixture.add_ancestor("org-b").await;
    fixture.set_accessed("org-leaf", &["org-a", "org-b"]).await;
    // both directories claim the id; unlike resident resolution this
    // operation returns the first concrete record
    let in_a = dir_a
        .add_user_with_id("PRIMARY", "alice-a", "shared-id")
        .await
        .unwrap();
    dir_b
        .add_user_with_id("PRIMARY", "alice-b", "shared-id")
        .await
        .unwrap();

    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(None, Some("shared-id"), &org("org-leaf"))
        .await
        .unwrap();
    assert_eq!(resolved, Some(in_a));
}

#[tokio::test]
async fn qualified_name_takes_priority_over_id() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;
    dir_a.add_secondary_store("LDAP").await;
    let by_name = dir_a.add_user("LDAP", "alice").await.unwrap();
    let by_id = dir_a.add_user("PRIMARY", "someone-else").await.unwrap();

    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(
            Some("LDAP/alice"),
            Some(&by_id.id),
            &org("org-leaf"),
        )
        .await
        .unwrap();
    assert_eq!(resolved, Some(by_name));
}

#[tokio::test]
async fn qualified_name_with_unknown_domain_falls_back_to_id() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;
    let by_id = dir_a.add_user("PRIMARY", "bob").await.unwrap();

    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(
            Some("NOPE/alice"),
            Some(&by_id.id),
            &org("org-leaf"),
        )
        .await
        .unwrap();
    assert_eq!(resolved, Some(by_id));
}

#[tokio::test]
async fn unqualified_name_falls_back_to_the_secondary_store_chain() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;
    dir_a.add_secondary_store("domain1").await;
    let bob = dir_a.add_user("domain1", "bob").await.unwrap();

    // "bob" does not exist in the primary store, but "domain1/bob" does
    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("bob"), None, &org("org-leaf"))
        .await
        .unwrap()
        .expect("resolved user");
    assert_eq!(resolved, bob);
    assert_eq!(resolved.qualified_name(), "domain1/bob");
}

#[tokio::test]
async fn secondary_chain_is_probed_in_link_order() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;
    dir_a.add_secondary_store("FIRST").await;
    dir_a.add_secondary_store("SECOND").await;
    let first = dir_a.add_user("FIRST", "carol").await.unwrap();
    dir_a.add_user("SECOND", "carol").await.unwrap();

    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("carol"), None, &org("org-leaf"))
        .await
        .unwrap();
    assert_eq!(resolved, Some(first));
}

#[tokio::test]
async fn qualified_name_never_scans_the_secondary_chain() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;
    dir_a.add_secondary_store("AD").await;
    dir_a.add_user("AD", "carol").await.unwrap();

    // "LDAP/carol" is qualified, so the chain fallback does not apply and
    // the unknown LDAP domain yields no match at all
    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("LDAP/carol"), None, &org("org-leaf"))
        .await
        .unwrap();
    assert_eq!(resolved, None);
}

#[tokio::test]
async fn lookup_falls_through_to_the_next_ancestor() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    let dir_b = fixture.add_ancestor("org-b").await;
    fixture.set_accessed("org-leaf", &["org-a", "org-b"]).await;
    // org-a's chain has no dave; org-b's secondary store does
    dir_a.add_secondary_store("LDAP").await;
    dir_b.add_secondary_store("AD").await;
    let dave = dir_b.add_user("AD", "dave").await.unwrap();

    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("dave"), None, &org("org-leaf"))
        .await
        .unwrap()
        .expect("resolved user");
    assert_eq!(resolved, dave);
    assert_eq!(resolved.qualified_name(), "AD/dave");
}

#[tokio::test]
async fn unqualified_name_is_never_probed_against_a_primary_store() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    let dir_b = fixture.add_ancestor("org-b").await;
    fixture.set_accessed("org-leaf", &["org-a", "org-b"]).await;
    dir_a.add_secondary_store("LDAP").await;
    // only the secondary-store chain answers unqualified names; a bare
    // name living in a primary store is not reachable by this strategy
    dir_b.add_user("PRIMARY", "dave").await.unwrap();

    let resolved = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("dave"), None, &org("org-leaf"))
        .await
        .unwrap();
    assert_eq!(resolved, None);
}

#[tokio::test]
async fn directory_fault_wraps_with_username_and_accessed_org() {
    let fixture = Fixture::new();
    let dir_a = fixture.add_ancestor("org-a").await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;
    dir_a.inject_fault().await;

    let err = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("alice"), None, &org("org-leaf"))
        .await
        .unwrap_err();
    match err {
        OrgResolverError::UserFromResidentOrg {
            user_name,
            accessed_organization_id,
            ..
        } => {
            assert_eq!(user_name, "alice");
            assert_eq!(accessed_organization_id, org("org-leaf"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn tenant_fault_is_wrapped_in_this_operation() {
    let fixture = Fixture::new();
    fixture.add_ancestor("org-a").await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;
    fixture
        .hierarchy
        .fail_tenant_resolution_for(org("org-a"))
        .await;

    // unlike resolve_resident_organization, every collaborator failure in
    // this operation is wrapped with the user/organization context
    let err = fixture
        .resolver()
        .resolve_user_from_resident_organization(None, Some("u-1"), &org("org-leaf"))
        .await
        .unwrap_err();
    assert!(matches!(err, OrgResolverError::UserFromResidentOrg { .. }));
}

#[tokio::test]
async fn unprovisioned_tenant_fails_the_lookup() {
    let fixture = Fixture::new();
    fixture
        .hierarchy
        .add_organization(org("org-a"), "org-a", Some(common::tenant_of("org-a")), vec![])
        .await;
    fixture.set_accessed("org-leaf", &["org-a"]).await;

    let err = fixture
        .resolver()
        .resolve_user_from_resident_organization(Some("alice"), None, &org("org-leaf"))
        .await
        .unwrap_err();
    assert!(matches!(err, OrgResolverError::UserFromResidentOrg { .. }));
}
