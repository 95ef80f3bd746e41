//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DatastoreConfig, LoggerSettings, ProviderConfig, ServerConfig, Settings,
};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl ServerConfig {
    /// Validate server configuration
    ///
    /// # Validation Rules
    /// - Port must be between 1 and 65535
    /// - Request timeout must be greater than 0
    /// - Keep-alive timeout must be greater than 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535. Please specify a valid port number.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.keep_alive_timeout == 0 {
            return Err(ConfigError::validation(
                "server.keep_alive_timeout",
                "Keep-alive timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl DatastoreConfig {
    /// Validate datastore configuration
    ///
    /// # Validation Rules
    /// - Both fields empty (enrichment disabled) is valid
    /// - Setting only one of base_url/service_key is a configuration mistake
    /// - A configured base_url must use http or https
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() && self.service_key.is_empty() {
            return Ok(());
        }

        if self.base_url.is_empty() || self.service_key.is_empty() {
            return Err(ConfigError::validation(
                "datastore",
                "datastore.base_url and datastore.service_key must be set together \
                 (leave both empty to disable presence/unread enrichment).",
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::validation(
                "datastore.base_url",
                "Datastore base URL must start with http:// or https://.",
            ));
        }

        Ok(())
    }
}

impl ProviderConfig {
    /// Validate push provider configuration
    ///
    /// # Validation Rules
    /// - URL must use http or https
    /// - Timeout must be greater than 0
    ///
    /// Missing credentials are intentionally NOT a validation error; they are
    /// reported per request at dispatch time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::validation(
                "provider.url",
                "Provider URL must start with http:// or https://.",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::validation(
                "provider.timeout_seconds",
                "Provider dispatch timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger configuration
    ///
    /// # Validation Rules
    /// - Level must be one of: trace, debug, info, warn, error
    /// - Format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.level".to_string(),
                format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::validation(
                "logger.format".to_string(),
                format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validate the complete configuration
    ///
    /// Runs validation on every section and returns the first failure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.datastore.validate()?;
        self.provider.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_validate_zero_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "server.port");
        }
    }

    #[test]
    fn test_server_config_validate_zero_timeout() {
        let config = ServerConfig {
            request_timeout: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_datastore_config_validate_empty_is_ok() {
        assert!(DatastoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_datastore_config_validate_partial_is_error() {
        let config = DatastoreConfig {
            base_url: "https://data.example.com".to_string(),
            service_key: String::new(),
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "datastore");
        }
    }

    #[test]
    fn test_datastore_config_validate_bad_scheme() {
        let config = DatastoreConfig {
            base_url: "ftp://data.example.com".to_string(),
            service_key: "key".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_provider_config_validate_defaults_ok() {
        // Unconfigured credentials must not fail startup validation
        assert!(ProviderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_provider_config_validate_bad_url() {
        let config = ProviderConfig {
            url: "not-a-url".to_string(),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "provider.url");
        }
    }

    #[test]
    fn test_provider_config_validate_zero_timeout() {
        let config = ProviderConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logger_settings_validate_invalid_level() {
        let settings = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        let result = settings.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { field, .. }) = result {
            assert_eq!(field, "logger.level");
        }
    }

    #[test]
    fn test_logger_settings_validate_invalid_format() {
        let settings = LoggerSettings {
            format: "xml".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_validate_defaults() {
        assert!(Settings::default().validate().is_ok());
    }
}
