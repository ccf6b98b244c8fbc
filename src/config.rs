use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LIST_LIMIT, DEFAULT_TIMEOUT_SECONDS};
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_list_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            list_limit: default_list_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Loads `config.toml` when present, defaults otherwise. The
    /// POKE_SCOUT_BASE_URL environment variable wins over both, which is how
    /// runs against a local API mirror are pointed away from pokeapi.co.
    pub fn load_or_default() -> Result<Self> {
        let config_path = "config.toml";
        let mut config = match fs::read_to_string(config_path) {
            Ok(content) => toml::from_str(&content)?,
            Err(e) => {
                debug!("No config file at '{}' ({}), using defaults", config_path, e);
                Config::default()
            }
        };

        if let Ok(base_url) = std::env::var("POKE_SCOUT_BASE_URL") {
            if !base_url.trim().is_empty() {
                config.api.base_url = base_url;
            }
        }

        Ok(config)
    }
}
