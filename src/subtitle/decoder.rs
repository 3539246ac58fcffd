//! DJI telemetry decoder
//!
//! Every cue of a DJI subtitle track carries exactly three lines once inline
//! markup is stripped:
//!
//! ```text
//! FrameCnt: 6469, DiffTime: 16ms
//! 2023-08-28 17:26:58.889
//! [iso: 160] [shutter: 1/297.91] [fnum: 2.8] [ev: 0] [latitude: 36.27423] [rel_alt: 46.000 abs_alt: 19.621]
//! ```
//!
//! A single bracket group may hold several `key: value` pairs.

use crate::domain::model::{TagValue, TelemetryRecord};
use crate::domain::rules::{tag_kind, TagKind};
use crate::error::{DjiError, DjiResult};
use crate::subtitle::srt::{read_srt_file, SubtitleCue};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

static FRAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^FrameCnt: (?P<frame_count>\d+), DiffTime: (?P<diff_time>\d+)ms")
        .expect("frame header pattern is valid")
});
static MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^<]+?>").expect("markup pattern is valid"));
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?P<data>[^\[]+?)\]").expect("tag pattern is valid"));

/// `%.f` reads the fraction as a decimal; `has_fraction` makes it mandatory
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Decode the body of one subtitle cue into a telemetry record
pub fn decode_cue(text: &str) -> DjiResult<TelemetryRecord> {
    let stripped = MARKUP_RE.replace_all(text, "");
    let stripped = stripped.trim();
    let lines: Vec<&str> = stripped.lines().map(str::trim).collect();
    if lines.len() != 3 {
        return Err(DjiError::format(format!(
            "expected 3 lines but got {}:\n{}",
            lines.len(),
            stripped
        )));
    }

    let caps = FRAME_RE
        .captures(lines[0])
        .ok_or_else(|| DjiError::format(format!("unexpected first line: {}", lines[0])))?;
    let frame_count = parse_counter(&caps["frame_count"], lines[0])?;
    let diff_time_ms = parse_counter(&caps["diff_time"], lines[0])?;

    if !has_fraction(lines[1]) {
        return Err(DjiError::format(format!(
            "invalid timestamp '{}': missing fractional seconds",
            lines[1]
        )));
    }
    let timestamp = NaiveDateTime::parse_from_str(lines[1], TIMESTAMP_FORMAT)
        .map_err(|e| DjiError::format(format!("invalid timestamp '{}': {}", lines[1], e)))?;

    let mut record = TelemetryRecord::new(frame_count, diff_time_ms, timestamp);
    for caps in TAG_RE.captures_iter(lines[2]) {
        let data = &caps["data"];
        let items: Vec<&str> = data.split_whitespace().collect();
        if items.len() % 2 != 0 {
            return Err(DjiError::format(format!("invalid metadata tag: [{}]", data)));
        }
        for pair in items.chunks_exact(2) {
            let key = pair[0].trim_end_matches(':');
            let value = coerce_tag(key, pair[1])?;
            record.tags.insert(key.to_string(), value);
        }
    }

    Ok(record)
}

/// Seconds must be followed by `.` and at least one digit
fn has_fraction(line: &str) -> bool {
    line.rsplit_once('.').is_some_and(|(_, fraction)| {
        !fraction.is_empty() && fraction.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Decode an ordered cue list, requiring frame counts 1, 2, 3, ...
pub fn decode_cues(cues: &[SubtitleCue]) -> DjiResult<Vec<TelemetryRecord>> {
    let mut records = Vec::with_capacity(cues.len());
    for (position, cue) in cues.iter().enumerate() {
        let record = decode_cue(&cue.text)?;
        let expected = position as u64 + 1;
        if record.frame_count != expected {
            return Err(DjiError::Sequence {
                expected,
                actual: record.frame_count,
            });
        }
        records.push(record);
    }
    Ok(records)
}

/// Read a subtitle file and decode its telemetry
pub fn read_telemetry(path: &Path) -> DjiResult<Vec<TelemetryRecord>> {
    let cues = read_srt_file(path)?;
    debug!("Read {} cues from {}", cues.len(), path.display());
    decode_cues(&cues)
}

fn parse_counter(digits: &str, line: &str) -> DjiResult<u64> {
    digits
        .parse()
        .map_err(|_| DjiError::format(format!("counter out of range: {}", line)))
}

fn coerce_tag(key: &str, raw: &str) -> DjiResult<TagValue> {
    let invalid = || DjiError::format(format!("invalid numeric value for {}: {}", key, raw));
    match tag_kind(key) {
        TagKind::Float => raw.parse().map(TagValue::Float).map_err(|_| invalid()),
        TagKind::Int => raw.parse().map(TagValue::Int).map_err(|_| invalid()),
        TagKind::Text => Ok(TagValue::Text(raw.to_string())),
    }
}
