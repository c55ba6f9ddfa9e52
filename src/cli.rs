//! Command-line interface for tictactoe_history.

use clap::Parser;

/// Tic-tac-toe in the terminal, with a move list you can jump through
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Two-player tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe_history.toml")]
    pub config: std::path::PathBuf,

    /// List the latest move first
    #[arg(long)]
    pub descending: bool,

    /// Write trace output to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}
