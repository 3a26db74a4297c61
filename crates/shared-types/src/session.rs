use crate::models::{AuthUser, UserRole};

/// Authentication state of the running client.
///
/// Modelled as three states rather than two booleans plus an optional user:
/// a user exists only in `Authenticated`, and no transition leads back to
/// `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    /// Initial check has not resolved yet.
    #[default]
    Loading,
    Anonymous,
    Authenticated(AuthUser),
}

impl Session {
    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Parsed role of the current user, if any and if recognised.
    pub fn role(&self) -> Option<UserRole> {
        self.user().and_then(AuthUser::user_role)
    }

    /// Outcome of the initial authentication check.
    pub fn resolved(user: Option<AuthUser>) -> Self {
        match user {
            Some(user) => Session::Authenticated(user),
            None => Session::Anonymous,
        }
    }

    pub fn login(&mut self, user: AuthUser) {
        *self = Session::Authenticated(user);
    }

    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }
}
