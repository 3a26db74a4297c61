use shared_types::{AppError, ClientPrefs};

use crate::storage::KeyValueStore;

/// Read persisted preferences. Missing or corrupt data restores defaults.
pub fn restore_prefs<S: KeyValueStore>(storage: &S, key: &str) -> ClientPrefs {
    match storage.get(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, key, "Discarding unreadable preferences");
            ClientPrefs::default()
        }),
        None => ClientPrefs::default(),
    }
}

pub fn save_prefs<S: KeyValueStore>(
    storage: &S,
    key: &str,
    prefs: &ClientPrefs,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(prefs)
        .map_err(|e| AppError::internal(format!("Could not encode preferences: {e}")))?;
    storage.set(key, &raw)
}
