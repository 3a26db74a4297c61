//! Client-side session plumbing: storage scopes, the auth service client,
//! startup bootstrap and the login/logout flows.

pub mod bootstrap;
pub mod config;
pub mod flows;
pub mod prefs;
pub mod service;
pub mod storage;

pub use bootstrap::{Bootstrap, BootstrapPhase};
pub use config::client_config;
pub use flows::{login, logout};
pub use prefs::{restore_prefs, save_prefs};
pub use service::{AuthService, HttpAuthService};
pub use storage::{CredentialStore, KeyValueStore, MemoryStorage, Persistence};

#[cfg(feature = "web")]
pub use storage::BrowserStorage;
