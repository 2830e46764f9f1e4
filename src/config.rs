//! Runtime configuration loaded from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// Process configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_addr: SocketAddr,
    pub catalog_path: PathBuf,
}

impl AppConfig {
    /// Read `CCTV_HTTP_ADDR` and `CCTV_CATALOG_PATH`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("CCTV_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::Invalid("CCTV_HTTP_ADDR".to_string(), raw_addr.clone()))?;

        let catalog_path = lookup("CCTV_CATALOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string())
            .into();

        Ok(Self {
            http_addr,
            catalog_path,
        })
    }
}
