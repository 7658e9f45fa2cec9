//! Command-line interface for tictactrail.

use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with a navigable move history
#[derive(Parser, Debug)]
#[command(name = "tictactrail")]
#[command(about = "Terminal tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write logs to (the TUI owns the terminal, so logs go to disk)
    #[arg(long, default_value = "tictactrail.log")]
    pub log_file: PathBuf,

    /// Disable mouse capture (keyboard input only)
    #[arg(long)]
    pub no_mouse: bool,
}
