use clap::Parser;

use pushrelay_rs::cli::{self, Cli};
use pushrelay_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration first: files + environment, then CLI overrides
    let settings = cli::load_and_merge_config(&cli)?;

    cli::init_logger_from_settings(&settings)?;

    // Dry runs and validation happen here; a plain serve falls through
    cli::execute_command(&cli, settings.clone()).await?;

    if cli.is_dry_run() {
        return Ok(());
    }

    Server::new(settings).run().await
}
