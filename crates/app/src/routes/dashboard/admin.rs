use dioxus::prelude::*;
use shared_types::LandingView;

use super::QuickLink;
use crate::routes::Route;

/// Center-wide overview for administrators.
#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        div { id: LandingView::Admin.id(), class: "dashboard dashboard-admin",
            h2 { "Center administration" }
            div { class: "quick-links",
                QuickLink { to: Route::Centers {}, label: "Centers", description: "Locations, capacity and licensing." }
                QuickLink { to: Route::Classes {}, label: "Classes", description: "Rooms, groups and staffing." }
                QuickLink { to: Route::Payments {}, label: "Payments", description: "Outstanding and received tuition." }
                QuickLink { to: Route::Messages {}, label: "Messages", description: "Announcements and family threads." }
            }
        }
    }
}
