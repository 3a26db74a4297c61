use pretty_assertions::assert_eq;
use shared_types::{evaluate, NavigationDecision, RouteRequirement, Session, UserRole};

use crate::common::signed_in;

/// Every distinct requirement over the three roles, empty included.
fn all_requirements() -> Vec<RouteRequirement> {
    (0u8..8)
        .map(|mask| {
            let roles: Vec<UserRole> = UserRole::ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, role)| *role)
                .collect();
            RouteRequirement::only(&roles)
        })
        .collect()
}

#[test]
fn unauthenticated_always_redirects_to_login() {
    for requirement in all_requirements() {
        assert_eq!(
            evaluate(&Session::Anonymous, &requirement),
            NavigationDecision::RedirectToLogin
        );
    }
}

#[test]
fn empty_requirement_renders_for_every_role() {
    for role in UserRole::ALL {
        assert_eq!(
            evaluate(&signed_in(role.as_str()), &RouteRequirement::any()),
            NavigationDecision::Render
        );
    }
}

#[test]
fn member_role_renders_and_non_member_is_denied() {
    for requirement in all_requirements() {
        for role in UserRole::ALL {
            let expected = if requirement.is_empty() || requirement.allows(role) {
                NavigationDecision::Render
            } else {
                NavigationDecision::RedirectToUnauthorized
            };
            assert_eq!(
                evaluate(&signed_in(role.as_str()), &requirement),
                expected,
                "role {role:?} against {requirement:?}"
            );
        }
    }
}

#[test]
fn empty_and_all_roles_behave_the_same_for_known_roles() {
    let everyone = RouteRequirement::only(&UserRole::ALL);
    for role in UserRole::ALL {
        let session = signed_in(role.as_str());
        assert_eq!(
            evaluate(&session, &RouteRequirement::any()),
            evaluate(&session, &everyone)
        );
    }
}

#[test]
fn evaluation_is_idempotent() {
    for requirement in all_requirements() {
        for session in [
            Session::Anonymous,
            signed_in("admin"),
            signed_in("teacher"),
            signed_in("parent"),
            signed_in("unknown"),
        ] {
            let first = evaluate(&session, &requirement);
            let second = evaluate(&session, &requirement);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn role_strings_differing_only_in_case_or_spacing_are_denied() {
    let admin_only = RouteRequirement::only(&[UserRole::Admin]);
    for role in [" ADMIN ", "Admin", "admin "] {
        assert_eq!(
            evaluate(&signed_in(role), &admin_only),
            NavigationDecision::RedirectToUnauthorized,
            "role {role:?} was admitted"
        );
    }
}

#[test]
fn unrecognised_role_is_denied_from_restricted_routes() {
    let requirement = RouteRequirement::only(&[UserRole::Admin, UserRole::Teacher]);
    assert_eq!(
        evaluate(&signed_in("superuser"), &requirement),
        NavigationDecision::RedirectToUnauthorized
    );
}
