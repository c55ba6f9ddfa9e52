//! tictactoe_history - terminal tic-tac-toe with move history.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_history::{SortOrder, TuiConfig, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)?;
    if cli.descending {
        config.set_initial_sort(SortOrder::Descending);
    }
    if let Some(log_file) = cli.log_file {
        config.set_log_file(log_file);
    }

    initialize_tracing(&config)?;
    info!(config_path = %cli.config.display(), "Configuration ready");

    run_tui(&config)
}

/// Sends trace output to the configured log file so it does not
/// interfere with the TUI.
fn initialize_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
