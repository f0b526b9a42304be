//! Command line interface for the `noughts` binary.

use clap::Parser;
use std::path::PathBuf;

/// Noughts and crosses in the terminal.
///
/// Flags override values from the configuration file, which overrides the
/// built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "noughts", version, about)]
pub struct Cli {
    /// Length of one board side (the board is always square).
    #[arg(short, long)]
    pub size: Option<usize>,

    /// One glyph per player, in turn order.
    #[arg(long)]
    pub symbols: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// File receiving the session log.
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
