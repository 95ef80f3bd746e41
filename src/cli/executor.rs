//! Command executor for dispatching CLI commands
//!
//! This module provides the main entry point for executing CLI commands
//! after parsing and configuration loading.

use super::handlers::ServeCommandHandler;
use super::parser::{Cli, Commands};
use crate::config::settings::Settings;
use crate::error::AppResult;

/// Execute a CLI command with the given settings
///
/// This function dispatches to the appropriate command handler based on
/// the parsed CLI arguments. A plain `serve` (or no command) returns Ok to
/// signal that the server should start; actual startup is handled in main.
///
/// # Errors
/// Returns errors from command handlers or validation failures
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    validate_command_args(cli)?;

    match &cli.command {
        Some(Commands::Serve { dry_run, .. }) if *dry_run => {
            ServeCommandHandler::new(settings).execute(true).await
        }
        Some(Commands::Serve { .. }) | None => Ok(()),
    }
}

/// Validate command-specific argument combinations before execution
fn validate_command_args(cli: &Cli) -> AppResult<()> {
    if let Some(Commands::Serve { host, port, .. }) = &cli.command {
        validate_serve_args(host.as_ref(), *port);
    }

    Ok(())
}

/// Warn about suspicious serve argument combinations
fn validate_serve_args(host: Option<&String>, port: Option<u16>) {
    if let (Some(host_addr), Some(port_num)) = (host, port)
        && port_num < 1024
        && host_addr == "0.0.0.0"
    {
        eprintln!(
            "Warning: Binding to 0.0.0.0 on port {} requires root privileges",
            port_num
        );
    }
}
