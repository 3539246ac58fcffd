// Domain models - Core types and data structures

use crate::utils::Utils;
use chrono::{DateTime, Local, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Value carried by one bracketed telemetry tag.
///
/// Whether a tag is numeric is decided by a fixed key table
/// (see [`crate::domain::rules::tag_kind`]); unknown keys stay text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TagValue {
    /// Borrow the raw text of a string tag
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Int(i) => Some(*i as f64),
            TagValue::Float(f) => Some(*f),
            TagValue::Text(s) => s.parse().ok(),
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Int(i) => write!(f, "{}", i),
            TagValue::Float(v) => write!(f, "{}", v),
            TagValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One decoded subtitle frame of DJI flight telemetry.
///
/// `timestamp` carries no zone in the source data and is interpreted as
/// local camera time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TelemetryRecord {
    /// 1-based frame counter, strictly sequential inside one subtitle file
    pub frame_count: u64,
    /// Milliseconds since the previous frame
    pub diff_time_ms: u64,
    pub timestamp: NaiveDateTime,
    /// Camera and GPS tags (`latitude`, `rel_alt`, `iso`, ...)
    pub tags: BTreeMap<String, TagValue>,
}

impl TelemetryRecord {
    pub fn new(frame_count: u64, diff_time_ms: u64, timestamp: NaiveDateTime) -> Self {
        Self {
            frame_count,
            diff_time_ms,
            timestamp,
            tags: BTreeMap::new(),
        }
    }

    /// Look up a tag by key
    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }
}

/// Category of a file found next to DJI clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Full-resolution clip (`.mov`, `.mp4`)
    Video,
    /// Low-resolution preview rendered by the camera (`.lrf`)
    Proxy,
    /// Per-frame telemetry subtitles (`.srt`)
    Subtitle,
}

/// One clip on disk plus the siblings sharing its base name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub base_name: String,
    /// Video extension as found on disk, including the leading dot
    pub extension: String,
    pub created: DateTime<Local>,
    pub size_bytes: u64,
    /// Camera-assigned ordinal taken from the file name
    pub index: Option<u64>,
    /// File name of the proxy sibling, if any
    pub proxy_file: Option<String>,
    /// File name of the subtitle sibling, if any
    pub subtitle_file: Option<String>,
}

impl FileEntry {
    /// Video file name (base name plus extension)
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }

    pub fn has_proxy(&self) -> bool {
        self.proxy_file.is_some()
    }

    pub fn has_subtitle(&self) -> bool {
        self.subtitle_file.is_some()
    }

    pub fn video_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    pub fn proxy_path(&self, dir: &Path) -> Option<PathBuf> {
        self.proxy_file.as_ref().map(|name| dir.join(name))
    }

    pub fn subtitle_path(&self, dir: &Path) -> Option<PathBuf> {
        self.subtitle_file.as_ref().map(|name| dir.join(name))
    }

    /// Label shown in listings: the ordinal index with thousands
    /// separators, or the base name without one
    pub fn label(&self) -> String {
        match self.index {
            Some(index) => Utils::format_thousands(index),
            None => self.base_name.clone(),
        }
    }
}
