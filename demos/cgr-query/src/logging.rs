//! Terminal logging setup.

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Route `log` records at `level` and above to stderr.
pub fn initialize_logging(level: LevelFilter) -> Result<()> {
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logging")
}
