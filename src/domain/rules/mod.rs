// Domain rules - Fixed classification tables and ordering policies

use crate::domain::model::*;
use std::cmp::Ordering;

/// Extension (lowercase, without dot) to file category
const EXTENSION_CATEGORIES: &[(&str, FileCategory)] = &[
    ("mov", FileCategory::Video),
    ("mp4", FileCategory::Video),
    ("lrf", FileCategory::Proxy),
    ("srt", FileCategory::Subtitle),
];

/// Subtitle extension used when converting a directory
pub const SUBTITLE_EXTENSION: &str = "srt";

/// Extension written for track documents
pub const TRACK_EXTENSION: &str = "gpx";

/// Tag keys decoded as floating point numbers
const FLOAT_TAG_KEYS: &[&str] = &["fnum", "focal_len"];

/// Tag keys decoded as integers
const INT_TAG_KEYS: &[&str] = &["ct", "ev", "iso"];

/// How a telemetry tag value is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Float,
    Int,
    Text,
}

/// Classify a file extension, case-insensitively. `None` means ignored.
pub fn classify_extension(extension: &str) -> Option<FileCategory> {
    let extension = extension.trim_start_matches('.').to_ascii_lowercase();
    EXTENSION_CATEGORIES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, category)| *category)
}

/// Look up the decoding kind for a tag key
pub fn tag_kind(key: &str) -> TagKind {
    if FLOAT_TAG_KEYS.contains(&key) {
        TagKind::Float
    } else if INT_TAG_KEYS.contains(&key) {
        TagKind::Int
    } else {
        TagKind::Text
    }
}

/// Derive the camera ordinal from a base name.
///
/// The base name is split on `_` and scanned from the end for the first
/// token made only of ASCII digits, so `DJI_20230828172510_0001_D` yields 1
/// and `DJI_20230828172510_D` yields 20230828172510.
///
/// A digit token too large for `u64` saturates to `u64::MAX`: the clip stays
/// indexed and sorts after every smaller index.
pub fn derive_index(base_name: &str) -> Option<u64> {
    base_name
        .split('_')
        .rev()
        .find(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .map(|token| token.parse().unwrap_or(u64::MAX))
}

/// Inventory order: creation time, then ordinal index with unindexed
/// entries after indexed ones.
pub fn inventory_order(a: &FileEntry, b: &FileEntry) -> Ordering {
    a.created
        .cmp(&b.created)
        .then_with(|| match (a.index, b.index) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
