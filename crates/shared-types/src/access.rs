use std::collections::BTreeSet;

use crate::models::UserRole;
use crate::session::Session;

/// Roles permitted to view a protected route.
///
/// An empty requirement admits every authenticated user, whatever their role.
/// It is not "deny all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteRequirement {
    allowed: BTreeSet<UserRole>,
}

impl RouteRequirement {
    /// Any authenticated user.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn only(roles: &[UserRole]) -> Self {
        Self {
            allowed: roles.iter().copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn allows(&self, role: UserRole) -> bool {
        self.allowed.contains(&role)
    }
}

/// What the router should do with a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Render,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Decide whether a protected route may render for `session`.
///
/// Only meaningful once the session has left `Loading`; the application root
/// never mounts guarded routes before that. A loading session is not
/// authenticated and so yields `RedirectToLogin`.
pub fn evaluate(session: &Session, requirement: &RouteRequirement) -> NavigationDecision {
    if !session.is_authenticated() {
        return NavigationDecision::RedirectToLogin;
    }
    if requirement.is_empty() {
        return NavigationDecision::Render;
    }
    match session.role() {
        Some(role) if requirement.allows(role) => NavigationDecision::Render,
        _ => NavigationDecision::RedirectToUnauthorized,
    }
}

/// Role-specific landing dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandingView {
    Admin,
    Teacher,
    Parent,
}

impl LandingView {
    pub fn id(&self) -> &'static str {
        match self {
            LandingView::Admin => "admin-dashboard",
            LandingView::Teacher => "teacher-dashboard",
            LandingView::Parent => "parent-dashboard",
        }
    }
}

/// Result of resolving the role-agnostic landing route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    View(LandingView),
    RedirectToUnauthorized,
}

/// Pick the landing dashboard for an authenticated session.
///
/// Assumes the enclosing route's guard already admitted the session. A missing
/// or unrecognised role fails closed.
pub fn dispatch(session: &Session) -> Dispatch {
    let Some(role) = session.role() else {
        return Dispatch::RedirectToUnauthorized;
    };
    match role {
        UserRole::Admin => Dispatch::View(LandingView::Admin),
        UserRole::Teacher => Dispatch::View(LandingView::Teacher),
        UserRole::Parent => Dispatch::View(LandingView::Parent),
    }
}
