use anyhow::Context;
use clap::Parser;
use tracing::debug;

use paycalc_cli::{Cli, Config, logging};

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("loading configuration")?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init_logging(level)?;
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    let output = paycalc_cli::run(cli.command, cli.json, &config).await?;
    print!("{output}");

    Ok(())
}
