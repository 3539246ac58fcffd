//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::AppConfig;
use crate::app::{AppContainer, CleanScope, ImportOptions};
use crate::cli::args::{CleanArgs, ConvertArgs, ImportArgs, ListArgs, SelectionArgs};
use crate::cli::Commands;
use crate::error::DjiResult;
use crate::filter::Selection;
use crate::output::render_inventory;

impl SelectionArgs {
    /// Parse the filter expressions; no filesystem access
    pub fn to_selection(&self) -> DjiResult<Selection> {
        Selection::from_exprs(self.date.as_deref(), self.index.as_deref())
    }
}

impl Commands {
    /// Whether confirmations are skipped for this command
    pub fn assume_yes(&self) -> bool {
        match self {
            Commands::Clean(args) => args.yes,
            Commands::Import(args) => args.yes,
            Commands::Convert(_) | Commands::List(_) => false,
        }
    }

    /// Validate the clip filter up front; commands without one select all
    pub fn selection(&self) -> DjiResult<Selection> {
        match self {
            Commands::List(args) => args.selection.to_selection(),
            Commands::Clean(args) => args.selection.to_selection(),
            Commands::Import(args) => args.selection.to_selection(),
            Commands::Convert(_) => Ok(Selection::All),
        }
    }
}

/// Dispatch a parsed command
pub fn run(
    container: &dyn AppContainer,
    config: &AppConfig,
    command: Commands,
    selection: &Selection,
) -> Result<()> {
    match command {
        Commands::Convert(args) => convert(container, args),
        Commands::List(args) => list(container, config, args, selection),
        Commands::Clean(args) => clean(container, config, args, selection),
        Commands::Import(args) => import(container, config, args, selection),
    }
}

/// Execute the convert command
pub fn convert(container: &dyn AppContainer, args: ConvertArgs) -> Result<()> {
    info!("Starting convert operation");
    let reports = container
        .convert_interactor()
        .execute(&args.srt_path, args.gpx_path.as_deref())
        .with_context(|| format!("Failed to convert {}", args.srt_path.display()))?;

    for report in &reports {
        println!(
            "{} -> {} ({} points)",
            report.job.srt_path.display(),
            report.job.gpx_path.display(),
            report.points
        );
    }
    Ok(())
}

/// Execute the list command
pub fn list(
    container: &dyn AppContainer,
    config: &AppConfig,
    args: ListArgs,
    selection: &Selection,
) -> Result<()> {
    let root = config.resolve_dir(args.selection.dir)?;
    info!("Listing clips under {}", root.display());

    let inventory = container
        .list_interactor()
        .execute(&root, selection)
        .with_context(|| format!("Failed to scan {}", root.display()))?;
    let rendered = render_inventory(&inventory.dir, &inventory.entries, args.format.into())
        .context("Failed to render inventory")?;
    print!("{}", rendered);
    Ok(())
}

/// Execute the clean command
pub fn clean(
    container: &dyn AppContainer,
    config: &AppConfig,
    args: CleanArgs,
    selection: &Selection,
) -> Result<()> {
    let root = config.resolve_dir(args.selection.dir)?;
    let scope = if args.all {
        CleanScope::AllFiles
    } else {
        CleanScope::Proxies
    };
    info!("Cleaning {:?} under {}", scope, root.display());

    let report = container
        .clean_interactor()
        .execute(&root, selection, scope)
        .with_context(|| format!("Failed to clean {}", root.display()))?;

    if report.cancelled {
        println!("Cancelled");
    } else {
        println!("Deleted {} files", report.deleted.len());
    }
    Ok(())
}

/// Execute the import command
pub fn import(
    container: &dyn AppContainer,
    config: &AppConfig,
    args: ImportArgs,
    selection: &Selection,
) -> Result<()> {
    let root = config.resolve_dir(args.selection.dir)?;
    let destination = config.resolve_import_dir(args.dest)?;
    let options = ImportOptions {
        include_subtitles: args.with_srt,
        include_proxies: args.with_lrf,
    };
    info!("Importing from {} to {}", root.display(), destination.display());

    let report = container
        .import_interactor()
        .execute(&root, &destination, selection, options)
        .with_context(|| format!("Failed to import into {}", destination.display()))?;

    if report.cancelled {
        println!("Cancelled");
    } else {
        println!("Imported {} files to {}", report.copied.len(), report.destination.display());
    }
    Ok(())
}
