use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Connection settings for a WCPS endpoint.
#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Full service URL, e.g. `https://ows.rasdaman.org/rasdaman/ows`.
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Accept self-signed certificates. Some deployments sit behind
    /// self-signed TLS; verification stays on unless opted out.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn default_timeout_secs() -> u64 {
    30
}
