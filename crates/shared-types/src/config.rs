use serde::{Deserialize, Serialize};

/// Default origin of the case-data endpoint.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Default messaging deep-link origin.
pub const DEFAULT_MESSAGING_BASE_URL: &str = "https://wa.me";

/// Case-data endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

/// Outbound link settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkConfig {
    #[serde(default = "default_messaging_base_url")]
    pub messaging_base_url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            messaging_base_url: default_messaging_base_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub links: LinkConfig,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_messaging_base_url() -> String {
    DEFAULT_MESSAGING_BASE_URL.to_string()
}
