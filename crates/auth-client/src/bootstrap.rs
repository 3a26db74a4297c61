use shared_types::Session;

use crate::service::AuthService;
use crate::storage::{CredentialStore, KeyValueStore};

/// Progress of the startup authentication check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    NotStarted,
    Verifying,
    Resolved,
}

impl BootstrapPhase {
    /// Allowed edges: `NotStarted -> Verifying -> Resolved`, plus
    /// `NotStarted -> Resolved` when there is no token to verify.
    pub fn can_advance_to(self, next: BootstrapPhase) -> bool {
        matches!(
            (self, next),
            (BootstrapPhase::NotStarted, BootstrapPhase::Verifying)
                | (BootstrapPhase::NotStarted, BootstrapPhase::Resolved)
                | (BootstrapPhase::Verifying, BootstrapPhase::Resolved)
        )
    }
}

/// One-shot resolution of the initial session.
///
/// `run` takes `self` by value, so a sequencer can only ever run once. The
/// application root builds one at startup and writes the returned session
/// into its session store.
pub struct Bootstrap<S, A> {
    credentials: CredentialStore<S>,
    service: A,
    phase: BootstrapPhase,
}

impl<S: KeyValueStore, A: AuthService> Bootstrap<S, A> {
    pub fn new(credentials: CredentialStore<S>, service: A) -> Self {
        Self {
            credentials,
            service,
            phase: BootstrapPhase::NotStarted,
        }
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    fn advance(&mut self, next: BootstrapPhase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "invalid bootstrap transition {:?} -> {:?}",
            self.phase,
            next
        );
        tracing::debug!(from = ?self.phase, to = ?next, "Bootstrap phase");
        self.phase = next;
    }

    /// Resolve the initial session.
    ///
    /// Without a stored token no request is made. With one, the auth service
    /// is asked exactly once; any failure (rejected token, network error,
    /// timeout) resolves to an anonymous session. Never retries and never
    /// returns an error.
    pub async fn run(mut self) -> Session {
        let Some(token) = self.credentials.load_token() else {
            tracing::info!("No stored credential, starting anonymous");
            self.advance(BootstrapPhase::Resolved);
            return Session::resolved(None);
        };

        self.advance(BootstrapPhase::Verifying);
        let verified = match self.service.verify_session(&token).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, role = %user.role, "Session verified");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session verification failed, starting anonymous");
                // A rejected token will never verify; transient failures keep
                // it for the next launch.
                if e.is_auth_rejection() {
                    self.credentials.clear();
                }
                None
            }
        };
        self.advance(BootstrapPhase::Resolved);
        Session::resolved(verified)
    }
}
