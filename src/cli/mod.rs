//! CLI module for pushrelay-rs
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution and validation

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

// Re-export public types for convenience
pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, LogLevel};

use crate::config::settings::Settings;
use crate::logger::init_logger;

/// Load and merge configuration from CLI arguments
///
/// This function handles the complete configuration loading process:
/// 1. Apply the `--env` override so layered loading picks the right files
/// 2. Load base configuration from files and environment variables
/// 3. Merge CLI argument overrides
/// 4. Validate the final configuration
///
/// # Errors
/// Returns error if configuration loading, merging, or validation fails
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    if let Some(env) = cli.env {
        // The loader reads the environment from this variable
        // SAFETY: called from main before any threads are spawned
        unsafe {
            std::env::set_var(
                crate::config::Environment::ENV_VAR,
                env.as_config_environment().as_str(),
            );
        }
    }

    let merger = ConfigurationMerger::from_config_path(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    merger
        .merge_cli_args(cli)
        .map_err(|e| anyhow::anyhow!("Configuration merge error: {}", e))
}

/// Initialize logger from settings
///
/// # Errors
/// Returns error if logger initialization fails
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    init_logger(&settings.logger)
        .map_err(|e| anyhow::anyhow!("Logger initialization error: {}", e))
}
