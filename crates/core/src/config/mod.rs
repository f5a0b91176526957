//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (QUAKEWATCH_*)
//! 2. TOML config file (if QUAKEWATCH_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::criteria::FormDefaults;
use crate::pagination::DEFAULT_PAGE_SIZE;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (QUAKEWATCH_*)
/// 2. TOML config file (if QUAKEWATCH_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog query endpoint.
    ///
    /// Set via QUAKEWATCH_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent string for catalog requests.
    ///
    /// Set via QUAKEWATCH_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via QUAKEWATCH_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Results per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Record cap sent as `limit` on searches.
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,

    /// Record cap for the latest-events read path.
    #[serde(default = "default_latest_limit")]
    pub latest_limit: u32,

    /// Minimum significance for the latest-events read path.
    #[serde(default = "default_latest_min_significance")]
    pub latest_min_significance: u32,

    /// Placeholders substituted for unparsable form fields.
    ///
    /// Set via the `[form_defaults]` table of the config file.
    #[serde(default)]
    pub form_defaults: FormDefaults,
}

fn default_base_url() -> String {
    "https://earthquake.usgs.gov/fdsnws/event/1/query".into()
}

fn default_user_agent() -> String {
    concat!("quakewatch/", env!("CARGO_PKG_VERSION")).into()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_result_limit() -> u32 {
    84
}

fn default_latest_limit() -> u32 {
    12
}

fn default_latest_min_significance() -> u32 {
    600
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            page_size: default_page_size(),
            result_limit: default_result_limit(),
            latest_limit: default_latest_limit(),
            latest_min_significance: default_latest_min_significance(),
            form_defaults: FormDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `QUAKEWATCH_`
    /// 2. TOML file from `QUAKEWATCH_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("QUAKEWATCH_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("QUAKEWATCH_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        Self::from_figment(&figment)
    }

    fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}
