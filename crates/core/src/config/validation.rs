//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

const MAX_LIMIT: u32 = 20_000;

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `base_url` is not an http(s) URL
    /// - `user_agent` is empty
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `page_size` is 0 or exceeds 100
    /// - any record limit is 0 or exceeds the catalog maximum of 20000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid { field: "base_url".into(), reason: "must be an http(s) URL".into() });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.page_size == 0 || self.page_size > 100 {
            return Err(ConfigError::Invalid { field: "page_size".into(), reason: "must be between 1 and 100".into() });
        }

        for (field, value) in [("result_limit", self.result_limit), ("latest_limit", self.latest_limit)] {
            if value == 0 || value > MAX_LIMIT {
                return Err(ConfigError::Invalid {
                    field: field.into(),
                    reason: format!("must be between 1 and {MAX_LIMIT}"),
                });
            }
        }

        if self.result_limit as usize % self.page_size != 0 {
            tracing::warn!(
                result_limit = self.result_limit,
                page_size = self.page_size,
                "result_limit is not a multiple of page_size; the last page will be partial"
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_base_url_scheme() {
        let config = AppConfig { base_url: "ftp://example.com".into(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "base_url"));
    }

    #[test]
    fn test_validate_timeout_too_small() {
        let config = AppConfig { timeout_ms: 50, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_timeout_exceeds_limit() {
        let config = AppConfig { timeout_ms: 301_000, ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "timeout_ms"));
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = AppConfig { user_agent: String::new(), ..Default::default() };
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "user_agent"));
    }

    #[test]
    fn test_validate_page_size() {
        let config = AppConfig { page_size: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "page_size"));

        let config = AppConfig { page_size: 101, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "page_size"));
    }

    #[test]
    fn test_validate_limits() {
        let config = AppConfig { result_limit: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "result_limit"));

        let config = AppConfig { latest_limit: 20_001, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field, .. }) if field == "latest_limit"));
    }

    #[test]
    fn test_validate_edge_case_values() {
        let config =
            AppConfig { timeout_ms: 100, page_size: 1, result_limit: 1, latest_limit: 20_000, ..Default::default() };
        assert!(config.validate().is_ok());
    }
}
