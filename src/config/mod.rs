//! Configuration management - store paths, dashboard parameters, and the
//! HTTP bind address.
//!
//! Configuration is layered: built-in defaults, then an optional
//! `config.toml`, then environment variable overrides (`DATA_DIR`,
//! `BIND_ADDR`). Every layer is optional, so the binary runs with zero
//! configuration.

/// Dashboard aggregation parameters
pub mod dashboard;
/// Store file locations
pub mod store;

pub use dashboard::DashboardConfig;
pub use store::StoreConfig;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

const CONFIG_PATH: &str = "config.toml";

/// Top-level application configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Store file locations
    pub store: StoreConfig,
    /// Dashboard aggregation parameters
    pub dashboard: DashboardConfig,
    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            dashboard: DashboardConfig::default(),
            bind_addr: "127.0.0.1:3001".to_string(),
        }
    }
}

/// Loads configuration from `./config.toml` (if present) and applies
/// environment overrides.
pub fn load() -> Result<AppConfig> {
    load_from(CONFIG_PATH)
}

/// Loads configuration from the given path; a missing file yields defaults.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let mut config = match std::fs::read_to_string(path.as_ref()) {
        Ok(contents) => toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse {}: {e}", path.as_ref().display()),
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            return Err(Error::Config {
                message: format!("Failed to read {}: {e}", path.as_ref().display()),
            });
        }
    };

    if let Ok(data_dir) = std::env::var("DATA_DIR") {
        config.store.data_dir = data_dir.into();
    }
    if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
        config.bind_addr = bind_addr;
    }

    Ok(config)
}
