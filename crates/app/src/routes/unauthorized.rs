use dioxus::prelude::*;

use crate::routes::Route;

/// Shown when a signed-in user opens a route their role may not see.
#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div { class: "status-page",
            div { class: "status-card",
                div { class: "status-code", "403" }
                h1 { "Access denied" }
                p { "Your account does not have permission to view this page." }
                Link { to: Route::Dashboard {}, class: "status-link", "Back to Dashboard" }
            }
        }
    }
}

