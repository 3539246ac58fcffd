//! CLI module for djiutil
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Manage DJI drone footage
///
/// Lists, imports and cleans clips on a memory card and converts the
/// per-frame telemetry subtitles into GPX tracks.
#[derive(Parser, Debug)]
#[command(name = "djiutil")]
#[command(about = "DJI footage utility - list, import, clean and convert clips")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = args::LogFormat::Text, global = true)]
    pub log_format: args::LogFormat,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert DJI subtitle telemetry to GPX tracks
    Convert(args::ConvertArgs),
    /// List clips on a card
    List(args::ListArgs),
    /// Delete proxies (or whole clips) from a card
    Clean(args::CleanArgs),
    /// Copy clips off a card with rsync
    Import(args::ImportArgs),
}
