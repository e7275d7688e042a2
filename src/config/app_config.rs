use serde::Deserialize;
use std::env;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Service configuration. The target list is the dispatcher's entire input;
/// there is no way to supply targets per request.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Socket address the HTTP API listens on.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Upstream URLs probed by the dispatcher, in report order.
    pub targets: Vec<Url>,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

/// Load the configuration from the YAML file named by the `CONFIG_FILE`
/// environment variable (default `config.yml`). `LISTEN_ADDR` overrides the
/// file's listen address.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = env::var("CONFIG_FILE").unwrap_or_else(|_| "config.yml".to_string());
    let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let mut config: AppConfig = serde_yaml::from_str(&raw)?;

    if let Ok(listen) = env::var("LISTEN_ADDR") {
        config.listen = listen;
    }

    log::info!("Loaded {} targets from {}", config.targets.len(), path);
    Ok(config)
}
