//! djiutil
//!
//! Command-line tool for DJI drone footage.
//!
//! # Usage
//!
//! ```bash
//! djiutil list --dir /Volumes/DJI --date "<2d"
//! djiutil import ~/Footage/2023-08-28 --dir /Volumes/DJI --index 3-7 --with-srt
//! djiutil clean --dir /Volumes/DJI --all --yes
//! djiutil convert /Volumes/DJI/DCIM/DJI_001
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use djiutil::adapters::{init_logging, LogLevel, TomlConfigAdapter};
use djiutil::app::DefaultAppContainer;
use djiutil::cli::args::LogFormat;
use djiutil::cli::{commands, Cli};

/// Level used when neither the flag, `RUST_LOG` nor the config file set one
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Main entry point for the djiutil CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Filter expressions are checked before the card is touched
    let selection = cli.command.selection()?;

    let config_adapter = TomlConfigAdapter::new();
    let config = config_adapter.load().context("Failed to load configuration")?;

    let level = cli
        .log_level
        .as_deref()
        .or(config.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    init_logging(LogLevel::parse(level)?, cli.log_format == LogFormat::Json);

    info!("Starting djiutil");
    if let Some(path) = config_adapter.config_file_path() {
        info!("Configuration file: {}", path.display());
    }

    let container = DefaultAppContainer::new(cli.command.assume_yes());
    commands::run(&container, &config, cli.command, &selection)?;

    info!("djiutil completed successfully");
    Ok(())
}
