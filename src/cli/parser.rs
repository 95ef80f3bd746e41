//! CLI argument parsing with clap
//!
//! This module defines the command-line interface structure using clap,
//! including all commands, arguments, and their documentation.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

// Include shadow-rs generated build information
use shadow_rs::shadow;
shadow!(build);

/// A stateless chat push-notification relay
#[derive(Parser, Debug)]
#[command(name = "pushrelay-rs")]
#[command(about = "A stateless chat push-notification relay")]
#[command(long_about = "
Pushrelay-rs receives push-send requests over HTTP, decides whether the
recipient should actually be interrupted, enriches the payload with
unread-count metadata, and forwards it to the configured push provider.

EXAMPLES:
    # Start the relay with default configuration
    pushrelay-rs serve

    # Start the relay on a custom host and port
    pushrelay-rs serve --host 0.0.0.0 --port 8080

    # Use a custom configuration file
    pushrelay-rs --config /path/to/config.toml serve

    # Check configuration without starting the server
    pushrelay-rs serve --dry-run

For more information about configuration options, see the documentation.
")]
#[command(version = build::CLAP_LONG_VERSION)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path
    ///
    /// Specify a custom configuration file to use instead of the default
    /// layered loading. The file should be in TOML format and must exist
    /// and be readable.
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Override environment detection
    ///
    /// Force the application to use a specific environment configuration
    /// instead of reading PUSHRELAY_APP_ENV.
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Enable verbose logging
    ///
    /// Raises log output to debug level. Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Reduces log output to error level only. Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Whether the invocation is a serve dry run
    pub fn is_dry_run(&self) -> bool {
        matches!(self.command, Some(Commands::Serve { dry_run: true, .. }))
    }
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the relay server (default)
    ///
    /// Launches the HTTP server with the configured settings. The server
    /// binds to the specified host and port and begins accepting requests.
    Serve {
        /// Host address to bind to
        ///
        /// Use 127.0.0.1 for localhost only, or 0.0.0.0 to accept
        /// connections from any interface.
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::validate_host_address)]
        host: Option<String>,

        /// Port number to listen on
        ///
        /// Must be between 1 and 65535. Ports below 1024 typically require
        /// root privileges.
        #[arg(short, long, value_name = "PORT")]
        port: Option<u16>,

        /// Log level override
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },
}

/// Environment override accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl Environment {
    /// Convert to the configuration environment type
    pub fn as_config_environment(self) -> crate::config::Environment {
        match self {
            Environment::Development => crate::config::Environment::Development,
            Environment::Test => crate::config::Environment::Test,
            Environment::Staging => crate::config::Environment::Staging,
            Environment::Production => crate::config::Environment::Production,
        }
    }
}

/// Log level override accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// The tracing filter directive for this level
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["pushrelay-rs"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "pushrelay-rs",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--log-level",
            "debug",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Serve {
                host,
                port,
                log_level,
                dry_run,
            }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert_eq!(log_level, Some(LogLevel::Debug));
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["pushrelay-rs", "--verbose", "--quiet"]).is_err());
    }

    #[test]
    fn test_is_dry_run() {
        let cli = Cli::try_parse_from(["pushrelay-rs", "serve", "--dry-run"]).unwrap();
        assert!(cli.is_dry_run());

        let cli = Cli::try_parse_from(["pushrelay-rs", "serve"]).unwrap();
        assert!(!cli.is_dry_run());
    }

    #[test]
    fn test_environment_aliases() {
        let cli = Cli::try_parse_from(["pushrelay-rs", "--env", "prod"]).unwrap();
        assert_eq!(cli.env, Some(Environment::Production));
    }
}
