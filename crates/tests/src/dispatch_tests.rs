use std::collections::HashSet;

use pretty_assertions::assert_eq;
use shared_types::{dispatch, Dispatch, LandingView, Session};

use crate::common::signed_in;

#[test]
fn known_roles_map_to_their_dashboards() {
    assert_eq!(dispatch(&signed_in("admin")), Dispatch::View(LandingView::Admin));
    assert_eq!(dispatch(&signed_in("teacher")), Dispatch::View(LandingView::Teacher));
    assert_eq!(dispatch(&signed_in("parent")), Dispatch::View(LandingView::Parent));
}

#[test]
fn dashboards_are_pairwise_distinct() {
    let views: HashSet<LandingView> = ["admin", "teacher", "parent"]
        .into_iter()
        .filter_map(|role| match dispatch(&signed_in(role)) {
            Dispatch::View(view) => Some(view),
            Dispatch::RedirectToUnauthorized => None,
        })
        .collect();
    assert_eq!(views.len(), 3);
}

#[test]
fn unknown_role_fails_closed() {
    for role in ["", "owner", "guardian", "administrator"] {
        assert_eq!(
            dispatch(&signed_in(role)),
            Dispatch::RedirectToUnauthorized,
            "role {role:?}"
        );
    }
}

#[test]
fn role_casing_variants_fail_closed() {
    for role in ["Admin", " ADMIN ", "Teacher", "PARENT"] {
        assert_eq!(
            dispatch(&signed_in(role)),
            Dispatch::RedirectToUnauthorized,
            "role {role:?}"
        );
    }
}

#[test]
fn missing_user_fails_closed() {
    assert_eq!(dispatch(&Session::Anonymous), Dispatch::RedirectToUnauthorized);
    assert_eq!(dispatch(&Session::Loading), Dispatch::RedirectToUnauthorized);
}
