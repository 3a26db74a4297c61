use auth_client::{CredentialStore, HttpAuthService};
use dioxus::prelude::*;
use shared_types::{AuthUser, ClientConfig, Session};

#[cfg(feature = "web")]
pub type PlatformStorage = auth_client::BrowserStorage;
#[cfg(not(feature = "web"))]
pub type PlatformStorage = auth_client::MemoryStorage;

#[cfg(feature = "web")]
fn storage_scopes() -> (PlatformStorage, PlatformStorage) {
    (
        auth_client::BrowserStorage::Local,
        auth_client::BrowserStorage::Session,
    )
}

#[cfg(not(feature = "web"))]
fn storage_scopes() -> (PlatformStorage, PlatformStorage) {
    (
        auth_client::MemoryStorage::new(),
        auth_client::MemoryStorage::new(),
    )
}

/// External collaborators, provided once at the root.
#[derive(Clone, Debug)]
pub struct Services {
    pub credentials: CredentialStore<PlatformStorage>,
    pub auth_service: HttpAuthService,
    pub prefs_key: String,
}

impl Services {
    pub fn from_config(config: &ClientConfig) -> Self {
        let (long_lived, session_lived) = storage_scopes();
        Self {
            credentials: CredentialStore::new(long_lived, session_lived, &config.auth.token_key),
            auth_service: HttpAuthService::new(config),
            prefs_key: config.persist.prefs_key.clone(),
        }
    }
}

/// Session store. The only writers are bootstrap resolution, login and
/// logout; everything else reads snapshots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::Loading),
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.session.read().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Store the bootstrap outcome. Ignored once the session has resolved.
    pub fn resolve(&mut self, session: Session) {
        if !self.session.peek().is_loading() {
            tracing::warn!("Session already resolved, ignoring bootstrap result");
            return;
        }
        self.session.set(session);
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.session.write().login(user);
    }

    pub fn clear_auth(&mut self) {
        self.session.write().logout();
    }
}

/// Mounts `children` only once the session has left `Loading`. Until then a
/// loading view is shown and nothing routed exists.
#[component]
pub fn SessionGate(children: Element) -> Element {
    let auth = use_auth();
    if auth.is_loading() {
        rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        }
    } else {
        rsx! { {children} }
    }
}

/// Hook to access the session store.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

pub fn use_services() -> Services {
    use_context::<Services>()
}
