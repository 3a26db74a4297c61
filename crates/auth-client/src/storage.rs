use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared_types::AppError;

/// A string key-value storage scope (`localStorage`, `sessionStorage`, ...).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// In-process storage scope for native builds and tests.
///
/// Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Web Storage scope of the current window.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserStorage {
    Local,
    Session,
}

#[cfg(feature = "web")]
impl BrowserStorage {
    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self {
            BrowserStorage::Local => window.local_storage().ok().flatten(),
            BrowserStorage::Session => window.session_storage().ok().flatten(),
        }
    }
}

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage = self
            .storage()
            .ok_or_else(|| AppError::storage("Browser storage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::storage(format!("Could not write {key} to browser storage")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let storage = self
            .storage()
            .ok_or_else(|| AppError::storage("Browser storage is unavailable"))?;
        storage
            .remove_item(key)
            .map_err(|_| AppError::storage(format!("Could not remove {key} from browser storage")))
    }
}

/// Where a freshly issued token should live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Persistence {
    /// Survives browser restarts ("remember me").
    LongLived,
    /// Dropped when the tab or browser session ends.
    SessionLived,
}

/// The bearer token, kept in one of two storage scopes under a fixed key.
#[derive(Clone, Debug)]
pub struct CredentialStore<S> {
    long_lived: S,
    session_lived: S,
    key: String,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(long_lived: S, session_lived: S, key: impl Into<String>) -> Self {
        Self {
            long_lived,
            session_lived,
            key: key.into(),
        }
    }

    /// Stored token, long-lived scope first. The session-lived scope is only
    /// read when the long-lived one has nothing. Empty values count as absent.
    pub fn load_token(&self) -> Option<String> {
        self.long_lived
            .get(&self.key)
            .filter(|t| !t.is_empty())
            .or_else(|| self.session_lived.get(&self.key).filter(|t| !t.is_empty()))
    }

    /// Store `token` in the chosen scope and drop any copy in the other.
    pub fn save_token(&self, token: &str, persistence: Persistence) -> Result<(), AppError> {
        let (target, other) = match persistence {
            Persistence::LongLived => (&self.long_lived, &self.session_lived),
            Persistence::SessionLived => (&self.session_lived, &self.long_lived),
        };
        target.set(&self.key, token)?;
        if let Err(e) = other.remove(&self.key) {
            tracing::warn!(error = %e, "Failed to drop token from the other scope");
        }
        Ok(())
    }

    /// Remove the token from both scopes. A scope that fails to remove is
    /// logged and does not stop the other from being cleared.
    pub fn clear(&self) {
        for scope in [&self.long_lived, &self.session_lived] {
            if let Err(e) = scope.remove(&self.key) {
                tracing::warn!(error = %e, "Failed to remove stored token");
            }
        }
    }

    pub fn long_lived(&self) -> &S {
        &self.long_lived
    }
}
