pub mod admin;
pub mod parent;
pub mod teacher;

use dioxus::prelude::*;
use shared_types::{dispatch, Dispatch, LandingView};

use crate::auth::use_auth;
use crate::routes::Route;

/// Role-adaptive dashboard: renders the landing view for the user's role.
/// An unrecognised role is sent to the access-denied page, never to a
/// default dashboard.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let session = auth.snapshot();

    match dispatch(&session) {
        Dispatch::View(LandingView::Admin) => rsx! { admin::AdminDashboard {} },
        Dispatch::View(LandingView::Teacher) => rsx! { teacher::TeacherDashboard {} },
        Dispatch::View(LandingView::Parent) => rsx! { parent::ParentDashboard {} },
        Dispatch::RedirectToUnauthorized => {
            tracing::warn!(
                role = session.user().map(|u| u.role.as_str()).unwrap_or(""),
                "No dashboard for role"
            );
            navigator().replace(Route::Unauthorized {});
            rsx! {}
        }
    }
}

/// Card linking to a section from a dashboard.
#[component]
fn QuickLink(to: Route, label: String, description: String) -> Element {
    rsx! {
        Link { to, class: "quick-link",
            h3 { "{label}" }
            p { "{description}" }
        }
    }
}
