//! Terminal tic-tac-toe with a navigable move history.

use anyhow::{Context, Result};
use clap::Parser;
use tictactrail::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs go to a file with ANSI disabled.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    tictactrail::tui::run(&cli)
}
