//! Inventory renderers for the `list` command

use crate::domain::model::FileEntry;
use crate::error::{DjiError, DjiResult};
use crate::output::OutputFormat;
use crate::utils::Utils;
use chrono::Duration;
use serde::Serialize;
use std::path::Path;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const PROXY_MARKER: &str = " [LRF]";
const SUBTITLE_MARKER: &str = " [SRT]";
const SPACING: &str = "      ";

/// Clips recorded further apart than this are printed as separate groups
const GAP_THRESHOLD_MINUTES: i64 = 10;

/// Render an inventory in the requested format
pub fn render_inventory(dir: &Path, entries: &[FileEntry], format: OutputFormat) -> DjiResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(dir, entries)),
        OutputFormat::Json => to_json(entries),
        OutputFormat::Yaml => to_yaml(entries),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> DjiResult<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| DjiError::render(format!("JSON serialization failed: {}", e)))
}

fn to_yaml<T: Serialize + ?Sized>(value: &T) -> DjiResult<String> {
    serde_yaml::to_string(value).map_err(|e| DjiError::render(format!("YAML serialization failed: {}", e)))
}

/// One line per clip, with a blank line between recording sessions
pub fn render_text(dir: &Path, entries: &[FileEntry]) -> String {
    if entries.is_empty() {
        return format!("No DJI files found in directory {}!\n", dir.display());
    }

    // Indices are right-aligned to the widest label, base names included
    let label_width = entries.iter().map(|entry| entry.label().len()).max().unwrap_or(0);
    let names: Vec<String> = entries
        .iter()
        .map(|entry| {
            let mut name = match entry.index {
                Some(_) => format!("{:>width$}", entry.label(), width = label_width),
                None => entry.label(),
            };
            if entry.has_proxy() {
                name.push_str(PROXY_MARKER);
            }
            if entry.has_subtitle() {
                name.push_str(SUBTITLE_MARKER);
            }
            name
        })
        .collect();
    let name_width = names.iter().map(String::len).max().unwrap_or(0);

    let gap = Duration::minutes(GAP_THRESHOLD_MINUTES);
    let mut out = String::new();
    let mut previous: Option<&FileEntry> = None;
    for (entry, name) in entries.iter().zip(&names) {
        if let Some(prev) = previous {
            if entry.created - prev.created > gap {
                out.push('\n');
            }
        }
        out.push_str(&format!(
            "{:<width$}{}{}{}{}\n",
            name,
            SPACING,
            entry.created.format(DATETIME_FORMAT),
            SPACING,
            Utils::format_file_size(entry.size_bytes),
            width = name_width
        ));
        previous = Some(entry);
    }
    out
}
