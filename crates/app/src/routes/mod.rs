pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod unauthorized;

use crate::auth::{use_auth, use_services};
use crate::persist_gate::use_prefs;
use dioxus::prelude::*;
use shared_types::{evaluate, NavigationDecision, RouteRequirement, Session, UserRole};

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use unauthorized::Unauthorized;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(RouteGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/messages")]
    Messages {},
    // ── Administration ──
    #[route("/centers")]
    Centers {},
    #[route("/payments")]
    Payments {},
    // ── Classroom ──
    #[route("/classes")]
    Classes {},
    #[route("/children")]
    Children {},
    #[route("/attendance")]
    Attendance {},
    #[route("/activities")]
    Activities {},
    #[route("/health-records")]
    HealthRecords {},
    // ── Family ──
    #[route("/my-children")]
    MyChildren {},
    #[route("/billing")]
    Billing {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Roles allowed on this route. `None` for public routes; an empty
    /// requirement admits any signed-in user.
    pub fn requirement(&self) -> Option<RouteRequirement> {
        use UserRole::{Admin, Parent, Teacher};

        let roles: &[UserRole] = match self {
            Route::Login { .. } | Route::Unauthorized {} | Route::NotFound { .. } => return None,
            Route::Dashboard {} | Route::Messages {} => &[],
            Route::Centers {} | Route::Payments {} => &[Admin],
            Route::Classes {}
            | Route::Children {}
            | Route::Attendance {}
            | Route::Activities {}
            | Route::HealthRecords {} => &[Admin, Teacher],
            Route::MyChildren {} | Route::Billing {} => &[Parent],
        };
        Some(RouteRequirement::only(roles))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login { .. } => "Sign in",
            Route::Unauthorized {} => "Access denied",
            Route::Dashboard {} => "Dashboard",
            Route::Messages {} => "Messages",
            Route::Centers {} => "Centers",
            Route::Payments {} => "Payments",
            Route::Classes {} => "Classes",
            Route::Children {} => "Children",
            Route::Attendance {} => "Attendance",
            Route::Activities {} => "Activities",
            Route::HealthRecords {} => "Health Records",
            Route::MyChildren {} => "My Children",
            Route::Billing {} => "Billing",
            Route::NotFound { .. } => "Not found",
        }
    }
}

/// Sidebar entries, in display order.
fn nav_routes() -> [Route; 11] {
    [
        Route::Dashboard {},
        Route::Messages {},
        Route::Centers {},
        Route::Payments {},
        Route::Classes {},
        Route::Children {},
        Route::Attendance {},
        Route::Activities {},
        Route::HealthRecords {},
        Route::MyChildren {},
        Route::Billing {},
    ]
}

/// Sidebar entries the guard would let `session` open.
pub fn visible_nav(session: &Session) -> Vec<Route> {
    nav_routes()
        .into_iter()
        .filter(|route| {
            let requirement = route.requirement().unwrap_or_default();
            evaluate(session, &requirement) == NavigationDecision::Render
        })
        .collect()
}

/// What the guard shows for a protected route.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    /// Session still resolving; nothing is evaluated yet.
    Wait,
    Render,
    Redirect(Route),
}

/// Apply `evaluate` to `route`, turning redirects into concrete targets.
pub fn guard_outcome(session: &Session, route: &Route) -> GuardOutcome {
    // The root does not mount the router while loading. Never evaluate then.
    if session.is_loading() {
        return GuardOutcome::Wait;
    }
    let requirement = route.requirement().unwrap_or_default();
    match evaluate(session, &requirement) {
        NavigationDecision::Render => GuardOutcome::Render,
        NavigationDecision::RedirectToLogin => GuardOutcome::Redirect(Route::Login {
            redirect: Some(route.to_string()),
        }),
        NavigationDecision::RedirectToUnauthorized => GuardOutcome::Redirect(Route::Unauthorized {}),
    }
}

/// Guard layout for every protected route.
///
/// Renders the outlet only for `GuardOutcome::Render`; otherwise replaces
/// the history entry with the login or access-denied page. Nothing behind
/// the guard is rendered before the decision.
#[component]
fn RouteGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();
    let outcome = guard_outcome(&auth.snapshot(), &route);
    tracing::debug!(route = %route, ?outcome, "Route guard");

    if let GuardOutcome::Redirect(target) = &outcome {
        navigator().replace(target.clone());
    }

    rsx! {
        GuardView { outcome, Outlet::<Route> {} }
    }
}

/// Shows `children` only when the guard allowed the route.
#[component]
fn GuardView(outcome: GuardOutcome, children: Element) -> Element {
    match outcome {
        GuardOutcome::Render => rsx! { {children} },
        GuardOutcome::Wait => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        GuardOutcome::Redirect(Route::Login { .. }) => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        },
        GuardOutcome::Redirect(_) => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting..." }
            }
        },
    }
}

/// Main app layout with sidebar navigation.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let services = use_services();
    let mut prefs = use_prefs();

    let session = auth.snapshot();
    let nav: Vec<(Route, &'static str)> = visible_nav(&session)
        .into_iter()
        .map(|item| {
            let class = if item == route { "active" } else { "" };
            (item, class)
        })
        .collect();
    let display_name = session
        .user()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    let current = prefs.prefs.read().clone();
    let shell_class = format!(
        "app-shell theme-{}{}",
        current.theme,
        if current.sidebar_collapsed { " sidebar-collapsed" } else { "" }
    );

    let handle_logout = move |_: MouseEvent| {
        let services = services.clone();
        async move {
            auth_client::logout(&services.credentials, &services.auth_service).await;
            auth.clear_auth();
            navigator().replace(Route::Login { redirect: None });
        }
    };

    rsx! {
        div { class: "{shell_class}",
            nav { class: "app-sidebar",
                div { class: "sidebar-brand", "Nurtura" }
                button {
                    class: "sidebar-toggle",
                    onclick: move |_| {
                        let collapsed = prefs.prefs.peek().sidebar_collapsed;
                        prefs.prefs.write().sidebar_collapsed = !collapsed;
                    },
                    if current.sidebar_collapsed { "»" } else { "«" }
                }
                for (item, class) in nav {
                    Link {
                        key: "{item}",
                        to: item.clone(),
                        class: "{class}",
                        "{item.title()}"
                    }
                }
            }
            main { class: "app-main",
                header { class: "app-header",
                    h1 { "{route.title()}" }
                    span { class: "app-user", "{display_name}" }
                    button {
                        onclick: move |_| {
                            let next = if prefs.prefs.peek().theme == "dark" { "light" } else { "dark" };
                            prefs.prefs.write().theme = next.to_string();
                        },
                        "Theme"
                    }
                    button { onclick: handle_logout, "Sign out" }
                }
                Outlet::<Route> {}
            }
        }
    }
}

/// Placeholder body for list pages. Page content is served by separate
/// feature modules; the shell only owns access control.
#[component]
fn PagePlaceholder(title: String, summary: String) -> Element {
    rsx! {
        section { class: "page-placeholder",
            h2 { "{title}" }
            p { "{summary}" }
        }
    }
}

#[component]
fn Messages() -> Element {
    rsx! { PagePlaceholder { title: "Messages", summary: "Conversations between families and staff." } }
}

#[component]
fn Centers() -> Element {
    rsx! { PagePlaceholder { title: "Centers", summary: "Locations, capacity and licensing." } }
}

#[component]
fn Payments() -> Element {
    rsx! { PagePlaceholder { title: "Payments", summary: "Tuition invoices and received payments." } }
}

#[component]
fn Classes() -> Element {
    rsx! { PagePlaceholder { title: "Classes", summary: "Class groups, rooms and assigned teachers." } }
}

#[component]
fn Children() -> Element {
    rsx! { PagePlaceholder { title: "Children", summary: "Enrolled children and guardians." } }
}

#[component]
fn Attendance() -> Element {
    rsx! { PagePlaceholder { title: "Attendance", summary: "Daily check-in and check-out." } }
}

#[component]
fn Activities() -> Element {
    rsx! { PagePlaceholder { title: "Activities", summary: "Planned and completed class activities." } }
}

#[component]
fn HealthRecords() -> Element {
    rsx! { PagePlaceholder { title: "Health Records", summary: "Allergies, medication and incident notes." } }
}

#[component]
fn MyChildren() -> Element {
    rsx! { PagePlaceholder { title: "My Children", summary: "Your children's day at a glance." } }
}

#[component]
fn Billing() -> Element {
    rsx! { PagePlaceholder { title: "Billing", summary: "Your invoices and payment history." } }
}
