use serde::{Deserialize, Serialize};

/// Nurtura user role.
///
/// - `Admin`: manages centers, staff, payments.
/// - `Teacher`: runs classes, attendance, activities and health records.
/// - `Parent`: sees their own children, messages and billing.
///
/// This is the only place the role set is enumerated. Adding a role here makes
/// every exhaustive `match` in the guard and dispatcher fail to compile until
/// it is handled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Parent,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Teacher, UserRole::Parent];

    /// Parse the `role` string sent by the auth service.
    /// Only the exact lowercase wire form matches; anything else is `None`,
    /// never a fallback role.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(UserRole::Admin),
            "teacher" => Some(UserRole::Teacher),
            "parent" => Some(UserRole::Parent),
            _ => None,
        }
    }

    /// Lowercase wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Teacher => "teacher",
            UserRole::Parent => "parent",
        }
    }
}

/// Authenticated user as returned by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub display_name: String,
    /// Raw role string; see [`AuthUser::user_role`].
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_id: Option<String>,
}

impl AuthUser {
    pub fn user_role(&self) -> Option<UserRole> {
        UserRole::parse(&self.role)
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: a bearer token plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Client-side preferences restored before first paint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientPrefs {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub sidebar_collapsed: bool,
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for ClientPrefs {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            sidebar_collapsed: false,
        }
    }
}
