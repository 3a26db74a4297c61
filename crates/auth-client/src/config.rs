use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// `config.toml` at the workspace root, baked in at compile time. The client
/// usually runs in a browser with no filesystem to read it from.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse config text, falling back to defaults if it is unparseable.
///
/// `NURTURA_API_URL`, if set when the crate is compiled, replaces
/// `api.base_url`.
pub fn parse_client_config(contents: &str) -> ClientConfig {
    let mut config: ClientConfig = toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
        ClientConfig::default()
    });
    if let Some(url) = option_env!("NURTURA_API_URL") {
        config.api.base_url = url.to_string();
    }
    config
}

/// Loaded client configuration. Parsed on first call, then cached for the
/// process lifetime.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = parse_client_config(EMBEDDED_CONFIG);
        tracing::debug!(?config, "Client config loaded");
        config
    })
}
