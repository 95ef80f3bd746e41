//! Configuration merger for CLI arguments and config files
//!
//! This module handles merging CLI argument overrides with file-based
//! configuration, implementing the configuration precedence logic where CLI
//! arguments override file and environment values.

use std::path::PathBuf;

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};

/// Configuration merger that handles CLI argument integration with
/// file-based configuration.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    /// Create a new configuration merger with base configuration
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Create a configuration merger by loading configuration from the
    /// specified file or the default layered loader.
    ///
    /// # Errors
    /// Returns ConfigError if configuration loading or validation fails
    pub fn from_config_path(config_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let config = if let Some(path) = config_path {
            Self::load_config_from_file(path)?
        } else {
            ConfigLoader::new()?.load()?
        };

        Ok(Self::new(config))
    }

    /// Load configuration from a single file
    fn load_config_from_file(path: &PathBuf) -> Result<Settings, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let config = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("{}: {}", path.display(), e))
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Merge CLI argument overrides into the base configuration
    ///
    /// Overrides applied, in increasing precedence over the file values:
    /// - `serve --host/--port` replace the server binding
    /// - `serve --log-level` replaces the logger level
    /// - `--verbose` / `--quiet` replace the logger level last
    ///
    /// # Errors
    /// Returns an error if the merged configuration fails validation
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut settings = self.base_config.clone();

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
            if let Some(level) = log_level {
                settings.logger.level = level.as_str().to_string();
            }
        }

        if cli.verbose {
            settings.logger.level = "debug".to_string();
        } else if cli.quiet {
            settings.logger.level = "error".to_string();
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_merge_without_overrides_keeps_base() {
        let cli = Cli::try_parse_from(["pushrelay-rs", "serve"]).unwrap();
        let merger = ConfigurationMerger::new(Settings::default());

        let settings = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_merge_serve_overrides() {
        let cli = Cli::try_parse_from([
            "pushrelay-rs",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--log-level",
            "warn",
        ])
        .unwrap();
        let merger = ConfigurationMerger::new(Settings::default());

        let settings = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.logger.level, "warn");
    }

    #[test]
    fn test_verbose_wins_over_log_level() {
        let cli = Cli::try_parse_from([
            "pushrelay-rs",
            "--verbose",
            "serve",
            "--log-level",
            "error",
        ])
        .unwrap();
        let merger = ConfigurationMerger::new(Settings::default());

        let settings = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn test_quiet_sets_error_level() {
        let cli = Cli::try_parse_from(["pushrelay-rs", "--quiet"]).unwrap();
        let merger = ConfigurationMerger::new(Settings::default());

        let settings = merger.merge_cli_args(&cli).unwrap();
        assert_eq!(settings.logger.level, "error");
    }
}
