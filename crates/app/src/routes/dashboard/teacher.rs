use dioxus::prelude::*;
use shared_types::LandingView;

use super::QuickLink;
use crate::routes::Route;

#[component]
pub fn TeacherDashboard() -> Element {
    rsx! {
        div { id: LandingView::Teacher.id(), class: "dashboard dashboard-teacher",
            h2 { "Today in class" }
            div { class: "quick-links",
                QuickLink { to: Route::Attendance {}, label: "Attendance", description: "Check children in and out." }
                QuickLink { to: Route::Activities {}, label: "Activities", description: "Plan and log the day." }
                QuickLink { to: Route::HealthRecords {}, label: "Health Records", description: "Allergies, medication, incidents." }
                QuickLink { to: Route::Messages {}, label: "Messages", description: "Talk with families." }
            }
        }
    }
}
