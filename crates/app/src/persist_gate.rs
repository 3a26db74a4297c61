use dioxus::prelude::*;
use shared_types::ClientPrefs;

/// Persisted client preferences and whether they have been restored yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrefsState {
    pub prefs: Signal<ClientPrefs>,
    pub restored: Signal<bool>,
}

impl PrefsState {
    pub fn new() -> Self {
        Self {
            prefs: Signal::new(ClientPrefs::default()),
            restored: Signal::new(false),
        }
    }
}

pub fn use_prefs() -> PrefsState {
    use_context::<PrefsState>()
}

/// Render `children` only once persisted state has been restored.
/// Until then nothing at all is rendered, not even a placeholder.
#[component]
pub fn PersistGate(restored: bool, children: Element) -> Element {
    if restored {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}
