use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// No client-side timeout unless one is configured
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Load the config file at `path` (optional, extension may be omitted) overlaid with
/// `PRICE_TRACKER__*` environment variables.
pub fn load_client_config(path: &str) -> anyhow::Result<ClientConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("PRICE_TRACKER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
