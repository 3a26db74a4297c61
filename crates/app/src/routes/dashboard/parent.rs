use dioxus::prelude::*;
use shared_types::LandingView;

use super::QuickLink;
use crate::routes::Route;

#[component]
pub fn ParentDashboard() -> Element {
    rsx! {
        div { id: LandingView::Parent.id(), class: "dashboard dashboard-parent",
            h2 { "Your family" }
            div { class: "quick-links",
                QuickLink { to: Route::MyChildren {}, label: "My Children", description: "Attendance, meals and naps." }
                QuickLink { to: Route::Billing {}, label: "Billing", description: "Invoices and payments." }
                QuickLink { to: Route::Messages {}, label: "Messages", description: "Notes from your child's teachers." }
            }
        }
    }
}
