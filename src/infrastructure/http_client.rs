// Shared HTTP client. The cookie store carries the session from login to every later call.
use crate::infrastructure::config::ServerSettings;
use std::time::Duration;

pub fn build_client(settings: &ServerSettings) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().cookie_store(true);
    if let Some(secs) = settings.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
