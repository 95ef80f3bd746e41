//! Configuration loader for pushrelay-rs
//!
//! This module provides the `ConfigLoader` struct that handles loading
//! configuration from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "PUSHRELAY_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "PUSHRELAY_CONFIG_FILE";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PUSHRELAY";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading
///
/// The loader supports the following configuration sources (in order of priority):
/// 1. `default.toml` - Base default configuration (required)
/// 2. `{environment}.toml` - Environment-specific configuration (optional)
/// 3. `local.toml` - Local development overrides (optional)
/// 4. `PUSHRELAY_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Specific configuration file path (if set, skips layered loading)
    config_file: Option<PathBuf>,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader
    ///
    /// This reads environment variables to determine:
    /// - Configuration directory (`PUSHRELAY_CONFIG_DIR`)
    /// - Specific configuration file (`PUSHRELAY_CONFIG_FILE`)
    /// - Application environment (`PUSHRELAY_APP_ENV`)
    ///
    /// # Errors
    ///
    /// Returns an error if both `PUSHRELAY_CONFIG_DIR` and `PUSHRELAY_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && std::env::var(CONFIG_DIR_ENV).is_ok() {
            return Err(ConfigError::mutual_exclusivity(
                "PUSHRELAY_CONFIG_DIR and PUSHRELAY_CONFIG_FILE cannot both be set. \
                 Use PUSHRELAY_CONFIG_DIR for layered configuration or \
                 PUSHRELAY_CONFIG_FILE for a single configuration file.",
            ));
        }

        let environment = AppEnvironment::from_env();

        Ok(Self {
            config_dir,
            config_file,
            environment,
        })
    }

    /// Get the current application environment
    #[allow(dead_code)]
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load configuration from all sources
    ///
    /// If `PUSHRELAY_CONFIG_FILE` is set, loads only that file.
    /// Otherwise, performs layered loading from the configuration directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` is not found (when using layered loading)
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Build the config::Config instance from all sources
    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = if let Some(ref config_file) = self.config_file {
            // Single file mode
            self.add_file_source(builder, config_file, true)?
        } else {
            // Layered loading mode
            self.build_layered_config(builder)?
        };

        // Environment variables are always highest priority
        // PUSHRELAY_PROVIDER__API_KEY -> provider.api_key
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    /// Build layered configuration from multiple files
    fn build_layered_config(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        // 1. Add default.toml (required)
        let default_path = self.config_dir.join("default.toml");
        let builder = self.add_file_source(builder, &default_path, true)?;

        // 2. Add {environment}.toml (optional)
        let env_path = self
            .config_dir
            .join(format!("{}.toml", self.environment.as_str()));
        let builder = self.add_file_source(builder, &env_path, false)?;

        // 3. Add local.toml (optional)
        let local_path = self.config_dir.join("local.toml");
        let builder = self.add_file_source(builder, &local_path, false)?;

        Ok(builder)
    }

    /// Add a file source to the config builder
    fn add_file_source(
        &self,
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        Ok(builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        ))
    }

    /// Add the environment variable source to the config builder
    fn add_env_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, name: &str, contents: &str) {
        let mut file = std::fs::File::create(dir.join(name)).expect("create config file");
        file.write_all(contents.as_bytes()).expect("write config file");
    }

    #[test]
    fn test_loader_missing_default_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        let result = loader.load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_loader_reads_default_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            "default.toml",
            r#"
                [server]
                port = 4000
            "#,
        );

        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().expect("load settings");
        assert_eq!(settings.server.port, 4000);
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn test_loader_environment_file_overrides_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            "default.toml",
            r#"
                [server]
                port = 4000

                [logger]
                level = "info"
            "#,
        );
        write_config(
            dir.path(),
            "test.toml",
            r#"
                [logger]
                level = "debug"
            "#,
        );

        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().expect("load settings");
        assert_eq!(settings.server.port, 4000); // from default.toml
        assert_eq!(settings.logger.level, "debug"); // overridden by test.toml
    }

    #[test]
    fn test_loader_single_file_mode() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            "only.toml",
            r#"
                [provider]
                app_id = "app-1"
                api_key = "key-1"
            "#,
        );

        let loader = ConfigLoader {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(dir.path().join("only.toml")),
            environment: AppEnvironment::Test,
        };

        let settings = loader.load().expect("load settings");
        assert!(settings.provider.configured());
    }

    #[test]
    fn test_loader_invalid_settings_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_config(
            dir.path(),
            "default.toml",
            r#"
                [logger]
                level = "shout"
            "#,
        );

        let loader = ConfigLoader {
            config_dir: dir.path().to_path_buf(),
            config_file: None,
            environment: AppEnvironment::Test,
        };

        assert!(matches!(
            loader.load(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
