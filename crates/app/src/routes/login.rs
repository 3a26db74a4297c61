use crate::auth::{use_auth, use_services};
use crate::routes::Route;
use dioxus::prelude::*;
use std::collections::HashMap;

/// Where to go after signing in: the `redirect` target if it parses to an
/// app route other than the login page itself, otherwise the dashboard.
pub fn destination(redirect: Option<&str>) -> Route {
    redirect
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Login { .. }))
        .unwrap_or(Route::Dashboard {})
}

/// Login page with email/password and a "remember me" option.
/// Accepts an optional `redirect` query param set by the route guard; after
/// login, navigates there instead of the dashboard.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember = use_signal(|| true);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    let go_to_destination = move || {
        let target = destination(redirect_target.read().as_deref());
        navigator().replace(target);
    };

    // Already signed in: skip the form
    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| {
        let services = services.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let result = auth_client::login(
                &services.credentials,
                &services.auth_service,
                &email(),
                &password(),
                remember(),
            )
            .await;

            match result {
                Ok(user) => {
                    auth.set_user(user);
                    go_to_destination();
                }
                Err(e) => {
                    if e.field_errors.is_empty() {
                        error_msg.set(Some(e.message));
                    } else {
                        field_errors.set(e.field_errors);
                    }
                }
            }
            loading.set(false);
        }
    };

    let email_error = field_errors.read().get("email").cloned();
    let password_error = field_errors.read().get("password").cloned();

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { "Nurtura" }
                p { class: "login-subtitle", "Sign in to your account" }

                if let Some(msg) = error_msg() {
                    p { class: "form-error", "{msg}" }
                }

                form { onsubmit: handle_login,
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |e: FormEvent| email.set(e.value()),
                    }
                    if let Some(err) = email_error {
                        p { class: "field-error", "{err}" }
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e: FormEvent| password.set(e.value()),
                    }
                    if let Some(err) = password_error {
                        p { class: "field-error", "{err}" }
                    }

                    label { class: "remember-me",
                        input {
                            r#type: "checkbox",
                            checked: remember(),
                            onchange: move |e: FormEvent| remember.set(e.checked()),
                        }
                        "Keep me signed in"
                    }

                    button { r#type: "submit", disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
