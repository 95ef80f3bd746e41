//! Logger initialization built on tracing-subscriber.
//!
//! The relay logs to stderr only; aggregation is the deployment's concern.
//! The level from configuration acts as the default directive and can be
//! refined per target with the standard `RUST_LOG` syntax.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::settings::LoggerSettings;

/// Initialize the global tracing subscriber from logger settings.
///
/// # Arguments
/// * `settings` - Logger settings (level, format, colored)
///
/// # Errors
/// Returns an error if the level does not parse as a filter directive or if
/// a global subscriber has already been installed.
pub fn init_logger(settings: &LoggerSettings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&settings.level)
        .with_context(|| format!("invalid log level '{}'", settings.level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(settings.colored);

    match settings.format.to_lowercase().as_str() {
        "json" => builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
        "compact" => builder
            .compact()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
        _ => builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?,
    }

    Ok(())
}
