//! Sarraf CLI
//!
//! Formats, rounds, and converts money using the configured currencies.

mod cli;
mod commands;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sarraf_shared::AppConfig;
use sarraf_store::InMemoryCurrencyStore;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sarraf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    let store = InMemoryCurrencyStore::from_settings(&config.currencies)
        .context("invalid currency configuration")?;

    let output = commands::run(cli.command, &store, &config.money).inspect_err(|e| {
        tracing::error!(error = %e, "command failed");
    })?;
    println!("{output}");

    Ok(())
}
