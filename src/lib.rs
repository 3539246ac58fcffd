//! djiutil library
//!
//! Inventory, selection, import and cleanup of DJI drone clips, and
//! conversion of the per-frame telemetry subtitles the drone records next
//! to each video into GPX tracks.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod output;
pub mod ports;
pub mod subtitle;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{FileCategory, FileEntry, TagValue, TelemetryRecord};
pub use error::{DjiError, DjiResult};
pub use filter::{DateFilter, IndexFilter, Selection};
pub use output::{OutputFormat, TrackDocument, TrackPoint};
