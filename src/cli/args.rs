//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::output::OutputFormat;

/// Log line format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Listing format accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
    Yaml,
}

impl From<ListFormat> for OutputFormat {
    fn from(format: ListFormat) -> Self {
        match format {
            ListFormat::Text => OutputFormat::Text,
            ListFormat::Json => OutputFormat::Json,
            ListFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

/// Card location and clip filter shared by list, clean and import
#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Card root, DCIM folder or clip folder
    #[arg(short, long, env = "DJIUTIL_DIR")]
    pub dir: Option<PathBuf>,

    /// Creation date filter: YYYY-MM-DD, <N[hdwmy] (newer) or >N[hdwmy] (older)
    #[arg(long, allow_hyphen_values = true)]
    pub date: Option<String>,

    /// Index filter: comma-separated indices and ranges, e.g. 1,4-6
    #[arg(short, long)]
    pub index: Option<String>,
}

/// Arguments for the convert command
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Subtitle file, or a directory of subtitle files
    pub srt_path: PathBuf,

    /// Output track (default: next to the subtitle file)
    pub gpx_path: Option<PathBuf>,
}

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

/// Arguments for the clean command
#[derive(Args, Debug)]
pub struct CleanArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Delete videos and subtitles as well as proxies
    #[arg(long)]
    pub all: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Destination directory (default: `import_dir` from the config file)
    pub dest: Option<PathBuf>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Copy subtitle files too
    #[arg(long)]
    pub with_srt: bool,

    /// Copy proxy files too
    #[arg(long)]
    pub with_lrf: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,
}
