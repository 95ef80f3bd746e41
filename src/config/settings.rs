//! Configuration settings structures for pushrelay-rs
//!
//! This module defines all configuration structures that can be loaded from
//! TOML files and environment variables.

use serde::{Deserialize, Serialize};

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "pushrelay-rs".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_provider_url() -> String {
    "https://onesignal.com/api/v1/notifications".to_string()
}

fn default_provider_timeout() -> u64 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "full".to_string()
}

fn default_true() -> bool {
    true
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Application basic information configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// Get the full server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
        }
    }
}

// ============================================================================
// Datastore Configuration
// ============================================================================

/// Datastore connection configuration for presence/unread lookups.
///
/// Both fields default to empty. Leaving either empty disables the
/// suppression/enrichment stage entirely; it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DatastoreConfig {
    /// Base URL of the datastore REST interface
    #[serde(default)]
    pub base_url: String,

    /// Service credential sent with every lookup
    /// IMPORTANT: keep this out of version control (use environment variables)
    #[serde(default)]
    pub service_key: String,
}

impl DatastoreConfig {
    /// Whether presence/unread enrichment is enabled
    pub fn enabled(&self) -> bool {
        !self.base_url.is_empty() && !self.service_key.is_empty()
    }
}

// ============================================================================
// Push Provider Configuration
// ============================================================================

/// Push provider dispatch configuration.
///
/// Credentials default to empty; an unconfigured provider is reported per
/// request at dispatch time rather than failing startup, so a relay can boot
/// in environments where the secret material arrives separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider application identifier
    #[serde(default)]
    pub app_id: String,

    /// Provider REST API key
    /// IMPORTANT: keep this out of version control (use environment variables)
    #[serde(default)]
    pub api_key: String,

    /// Provider notifications endpoint URL
    #[serde(default = "default_provider_url")]
    pub url: String,

    /// Dispatch timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    /// Whether both provider credentials are present
    pub fn configured(&self) -> bool {
        !self.app_id.is_empty() && !self.api_key.is_empty()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            api_key: String::new(),
            url: default_provider_url(),
            timeout_seconds: default_provider_timeout(),
        }
    }
}

// ============================================================================
// Logger Settings
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerSettings {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "full", "compact", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to use colored output
    #[serde(default = "default_true")]
    pub colored: bool,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            colored: default_true(),
        }
    }
}

// ============================================================================
// Main Settings Structure
// ============================================================================

/// Complete application settings
///
/// This structure represents the entire configuration that can be loaded
/// from TOML files and environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application information
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Datastore lookup configuration
    #[serde(default)]
    pub datastore: DatastoreConfig,

    /// Push provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ========================================================================
    // Arbitrary implementations for property-based testing
    // ========================================================================

    fn arb_application_config() -> impl Strategy<Value = ApplicationConfig> {
        (
            "[a-z][a-z0-9-]{0,20}",                 // name: valid app name
            "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", // version: semver-like
        )
            .prop_map(|(name, version)| ApplicationConfig { name, version })
    }

    fn arb_server_config() -> impl Strategy<Value = ServerConfig> {
        (
            prop_oneof![
                Just("127.0.0.1".to_string()),
                Just("0.0.0.0".to_string()),
                Just("localhost".to_string()),
            ],
            1u16..=65535u16, // valid port range
            1u64..=300u64,   // request_timeout
            1u64..=300u64,   // keep_alive_timeout
        )
            .prop_map(
                |(host, port, request_timeout, keep_alive_timeout)| ServerConfig {
                    host,
                    port,
                    request_timeout,
                    keep_alive_timeout,
                },
            )
    }

    fn arb_datastore_config() -> impl Strategy<Value = DatastoreConfig> {
        prop_oneof![
            Just(DatastoreConfig::default()),
            Just(DatastoreConfig {
                base_url: "https://data.example.com/rest/v1".to_string(),
                service_key: "service-role-key".to_string(),
            }),
        ]
    }

    fn arb_provider_config() -> impl Strategy<Value = ProviderConfig> {
        (
            "[a-f0-9-]{8,36}",    // app_id
            "[A-Za-z0-9+/=]{16,64}", // api_key
            1u64..=120u64,        // timeout_seconds
        )
            .prop_map(|(app_id, api_key, timeout_seconds)| ProviderConfig {
                app_id,
                api_key,
                url: default_provider_url(),
                timeout_seconds,
            })
    }

    fn arb_logger_settings() -> impl Strategy<Value = LoggerSettings> {
        (
            prop_oneof![
                Just("trace".to_string()),
                Just("debug".to_string()),
                Just("info".to_string()),
                Just("warn".to_string()),
                Just("error".to_string()),
            ],
            prop_oneof![
                Just("full".to_string()),
                Just("compact".to_string()),
                Just("json".to_string()),
            ],
            any::<bool>(),
        )
            .prop_map(|(level, format, colored)| LoggerSettings {
                level,
                format,
                colored,
            })
    }

    fn arb_settings() -> impl Strategy<Value = Settings> {
        (
            arb_application_config(),
            arb_server_config(),
            arb_datastore_config(),
            arb_provider_config(),
            arb_logger_settings(),
        )
            .prop_map(|(application, server, datastore, provider, logger)| Settings {
                application,
                server,
                datastore,
                provider,
                logger,
            })
    }

    // ========================================================================
    // Property-based tests
    // ========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// For any valid Settings instance, serializing to TOML and then
        /// deserializing back produces an equivalent Settings instance.
        #[test]
        fn prop_settings_round_trip_serialization(settings in arb_settings()) {
            let toml_str = toml::to_string(&settings)
                .expect("Settings should serialize to TOML");

            let deserialized: Settings = toml::from_str(&toml_str)
                .expect("TOML should deserialize back to Settings");

            prop_assert_eq!(settings, deserialized);
        }
    }

    // ========================================================================
    // Unit tests
    // ========================================================================

    #[test]
    fn test_application_config_defaults() {
        let config = ApplicationConfig::default();
        assert_eq!(config.name, "pushrelay-rs");
        assert_eq!(config.version, crate::pkg_version());
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.keep_alive_timeout, 75);
    }

    #[test]
    fn test_server_config_address() {
        let config = ServerConfig::default();
        assert_eq!(config.address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_datastore_config_defaults_disabled() {
        let config = DatastoreConfig::default();
        assert_eq!(config.base_url, "");
        assert_eq!(config.service_key, "");
        assert!(!config.enabled());
    }

    #[test]
    fn test_datastore_config_enabled_requires_both_fields() {
        let only_url = DatastoreConfig {
            base_url: "https://data.example.com".to_string(),
            service_key: String::new(),
        };
        assert!(!only_url.enabled());

        let both = DatastoreConfig {
            base_url: "https://data.example.com".to_string(),
            service_key: "key".to_string(),
        };
        assert!(both.enabled());
    }

    #[test]
    fn test_provider_config_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.app_id, "");
        assert_eq!(config.api_key, "");
        assert_eq!(config.url, "https://onesignal.com/api/v1/notifications");
        assert_eq!(config.timeout_seconds, 15);
        assert!(!config.configured());
    }

    #[test]
    fn test_provider_config_configured_requires_both_credentials() {
        let only_app = ProviderConfig {
            app_id: "app".to_string(),
            ..Default::default()
        };
        assert!(!only_app.configured());

        let both = ProviderConfig {
            app_id: "app".to_string(),
            api_key: "key".to_string(),
            ..Default::default()
        };
        assert!(both.configured());
    }

    #[test]
    fn test_logger_settings_defaults() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.level, "info");
        assert_eq!(settings.format, "full");
        assert!(settings.colored);
    }

    #[test]
    fn test_settings_deserialize_partial() {
        let toml_str = r#"
            [application]
            name = "my-relay"

            [server]
            port = 8080
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");
        assert_eq!(settings.application.name, "my-relay");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1"); // default
        assert!(!settings.datastore.enabled()); // default
        assert!(!settings.provider.configured()); // default
    }

    #[test]
    fn test_settings_deserialize_full() {
        let toml_str = r#"
            [application]
            name = "relay"
            version = "1.0.0"

            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout = 60
            keep_alive_timeout = 120

            [datastore]
            base_url = "https://data.example.com/rest/v1"
            service_key = "svc-key"

            [provider]
            app_id = "app-123"
            api_key = "key-456"
            url = "https://push.example.com/notifications"
            timeout_seconds = 20

            [logger]
            level = "debug"
            format = "json"
            colored = false
        "#;

        let settings: Settings = toml::from_str(toml_str).expect("Failed to deserialize");

        assert_eq!(settings.application.name, "relay");
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
        assert!(settings.datastore.enabled());
        assert_eq!(settings.datastore.base_url, "https://data.example.com/rest/v1");
        assert!(settings.provider.configured());
        assert_eq!(settings.provider.url, "https://push.example.com/notifications");
        assert_eq!(settings.provider.timeout_seconds, 20);
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.logger.format, "json");
        assert!(!settings.logger.colored);
    }
}
