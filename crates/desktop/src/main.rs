//! `stockdesk` binary entry point.

use anyhow::Context;
use clap::Parser;

use stockdesk_desktop::AppConfig;
use stockdesk_desktop::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env().context("reading configuration")?;

    stockdesk_observability::init(config.log_format);
    tracing::debug!(api_url = %config.client.api_url, "configuration loaded");

    run(cli, config).await
}
