use std::collections::HashMap;

use shared_types::{AppError, AuthUser, LoginRequest};

use crate::service::AuthService;
use crate::storage::{CredentialStore, KeyValueStore, Persistence};

/// Sign in and persist the issued token.
///
/// With `remember` the token goes to the long-lived scope, otherwise to the
/// session-lived one. The caller writes the returned user into its session
/// store.
pub async fn login<S: KeyValueStore, A: AuthService>(
    credentials: &CredentialStore<S>,
    service: &A,
    email: &str,
    password: &str,
    remember: bool,
) -> Result<AuthUser, AppError> {
    let email = email.trim();
    let mut field_errors = HashMap::new();
    if email.is_empty() {
        field_errors.insert("email".to_string(), "Email is required".to_string());
    }
    if password.is_empty() {
        field_errors.insert("password".to_string(), "Password is required".to_string());
    }
    if !field_errors.is_empty() {
        return Err(AppError::validation("Validation failed", field_errors));
    }

    let response = service
        .login(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    let persistence = if remember {
        Persistence::LongLived
    } else {
        Persistence::SessionLived
    };
    credentials.save_token(&response.token, persistence)?;
    tracing::info!(user_id = response.user.id, ?persistence, "Logged in");
    Ok(response.user)
}

/// Sign out: tell the service (best effort) and forget the token in both
/// scopes. The caller moves its session store to anonymous.
pub async fn logout<S: KeyValueStore, A: AuthService>(credentials: &CredentialStore<S>, service: &A) {
    if let Some(token) = credentials.load_token() {
        if let Err(e) = service.logout(&token).await {
            tracing::warn!(error = %e, "Remote logout failed, clearing local credential anyway");
        }
    }
    credentials.clear();
    tracing::info!("Logged out");
}
