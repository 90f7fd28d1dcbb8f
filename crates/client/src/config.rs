use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so the browser build
/// needs no filesystem access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse the embedded config and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
pub fn load_client_config() {
    CONFIG.get_or_init(|| {
        let config = parse_client_config(EMBEDDED_CONFIG);
        tracing::info!(
            api = %config.api.base_url,
            messaging = %config.links.messaging_base_url,
            "client config loaded"
        );
        config
    });
}

/// Get the loaded config, loading it first if needed.
pub fn client_config() -> &'static ClientConfig {
    load_client_config();
    CONFIG.get_or_init(ClientConfig::default)
}

/// Parse config text. Invalid TOML logs a warning and yields defaults.
pub fn parse_client_config(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        ClientConfig::default()
    })
}
