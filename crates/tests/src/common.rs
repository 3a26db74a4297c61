use std::cell::{Cell, RefCell};
use std::rc::Rc;

use auth_client::{AuthService, CredentialStore, KeyValueStore, MemoryStorage};
use shared_types::{AppError, AuthUser, LoginRequest, LoginResponse, Session};

pub const TOKEN_KEY: &str = "nurtura_token";

/// Build a user with the given raw role string.
pub fn user(role: &str) -> AuthUser {
    AuthUser {
        id: 42,
        email: format!("{role}@sunnyside.example"),
        display_name: format!("Test {role}"),
        role: role.to_string(),
        center_id: Some("sunnyside".to_string()),
    }
}

pub fn signed_in(role: &str) -> Session {
    Session::Authenticated(user(role))
}

/// Storage scope that counts reads, so tests can check how often each
/// scope was consulted.
#[derive(Clone, Default)]
pub struct CountingStore {
    inner: MemoryStorage,
    reads: Rc<Cell<usize>>,
}

impl CountingStore {
    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.reads.set(self.reads.get() + 1);
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.inner.remove(key)
    }
}

/// Two empty scopes plus a credential store over them. The returned scopes
/// share state with the store.
pub fn scopes() -> (CountingStore, CountingStore, CredentialStore<CountingStore>) {
    let long_lived = CountingStore::default();
    let session_lived = CountingStore::default();
    let credentials = CredentialStore::new(long_lived.clone(), session_lived.clone(), TOKEN_KEY);
    (long_lived, session_lived, credentials)
}

/// Scripted auth service recording every call it receives.
#[derive(Clone)]
pub struct FakeAuthService {
    verify: Result<AuthUser, AppError>,
    login: Result<LoginResponse, AppError>,
    logout: Result<(), AppError>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeAuthService {
    /// Accepts any token as belonging to a user with `role`.
    pub fn verifies_as(role: &str) -> Self {
        Self {
            verify: Ok(user(role)),
            login: Ok(LoginResponse {
                token: "issued-token".to_string(),
                user: user(role),
            }),
            logout: Ok(()),
            calls: Rc::default(),
        }
    }

    /// Rejects every token and every login.
    pub fn rejecting() -> Self {
        Self {
            verify: Err(AppError::unauthorized("Session expired")),
            login: Err(AppError::unauthorized("Invalid email or password")),
            logout: Err(AppError::unauthorized("Session expired")),
            calls: Rc::default(),
        }
    }

    /// Every request fails at the transport level.
    pub fn unreachable() -> Self {
        Self {
            verify: Err(AppError::network("connection refused")),
            login: Err(AppError::network("connection refused")),
            logout: Err(AppError::network("connection refused")),
            calls: Rc::default(),
        }
    }

    /// Verification times out.
    pub fn timing_out() -> Self {
        Self {
            verify: Err(AppError::timeout("The server took too long to respond")),
            ..Self::unreachable()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl AuthService for FakeAuthService {
    async fn verify_session(&self, token: &str) -> Result<AuthUser, AppError> {
        self.calls.borrow_mut().push(format!("verify:{token}"));
        self.verify.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.calls.borrow_mut().push(format!("login:{}", request.email));
        self.login.clone()
    }

    async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.calls.borrow_mut().push(format!("logout:{token}"));
        self.logout.clone()
    }
}
