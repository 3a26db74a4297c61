use serde::{Deserialize, Serialize};

/// `[api]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// `[auth]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthConfig {
    /// Key the bearer token is stored under in both storage scopes.
    #[serde(default = "default_token_key")]
    pub token_key: String,
    /// Upper bound on the startup session verification. A timeout counts
    /// as a failed verification.
    #[serde(default = "default_verify_timeout_secs")]
    pub verify_timeout_secs: u64,
}

/// `[persist]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PersistConfig {
    #[serde(default = "default_prefs_key")]
    pub prefs_key: String,
}

/// Top-level client config structure matching `config.toml`.
///
/// Every field has a default, so a missing or partial file still yields a
/// usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub persist: PersistConfig,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_token_key() -> String {
    "nurtura_token".to_string()
}

fn default_verify_timeout_secs() -> u64 {
    10
}

fn default_prefs_key() -> String {
    "nurtura_prefs".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            verify_timeout_secs: default_verify_timeout_secs(),
        }
    }
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self {
            prefs_key: default_prefs_key(),
        }
    }
}
