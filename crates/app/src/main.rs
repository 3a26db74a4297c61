use auth_client::{restore_prefs, save_prefs, Bootstrap};
use dioxus::prelude::*;

mod auth;
mod persist_gate;
mod routes;
use auth::{AuthState, Services, SessionGate};
use persist_gate::{PersistGate, PrefsState};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let services = use_context_provider(|| Services::from_config(auth_client::client_config()));
    let mut auth = use_context_provider(AuthState::new);
    let mut prefs = use_context_provider(PrefsState::new);

    // Restore persisted preferences before anything routed is painted.
    let restore_services = services.clone();
    use_hook(move || {
        spawn(async move {
            let restored = restore_prefs(
                restore_services.credentials.long_lived(),
                &restore_services.prefs_key,
            );
            prefs.prefs.set(restored);
            prefs.restored.set(true);
        });
    });

    // Resolve the initial session exactly once per app lifetime.
    let boot_services = services.clone();
    use_hook(move || {
        spawn(async move {
            let bootstrap = Bootstrap::new(boot_services.credentials, boot_services.auth_service);
            let session = bootstrap.run().await;
            auth.resolve(session);
        });
    });

    // Write preference changes back once the restored values are in place.
    use_effect(move || {
        let current = prefs.prefs.read().clone();
        if !*prefs.restored.peek() {
            return;
        }
        if let Err(e) = save_prefs(services.credentials.long_lived(), &services.prefs_key, &current) {
            tracing::warn!(error = %e, "Failed to persist preferences");
        }
    });

    let restored = *prefs.restored.read();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        PersistGate { restored,
            SessionGate { Router::<Route> {} }
        }
    }
}
