//! SubRip (`.srt`) cue reader
//!
//! Splits a subtitle file into timed cues. Only the structure is parsed
//! here; the cue bodies are handed to the telemetry decoder untouched.

use crate::error::{DjiError, DjiResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static TIMECODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+):(\d{2}):(\d{2})[,.](\d{3})\s*-->\s*(\d+):(\d{2}):(\d{2})[,.](\d{3})")
        .expect("timecode pattern is valid")
});

/// One timed subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleCue {
    pub index: u32,
    pub start_ms: u64,
    pub end_ms: u64,
    /// Raw body, possibly containing inline markup
    pub text: String,
}

/// Read and parse a subtitle file
pub fn read_srt_file(path: &Path) -> DjiResult<Vec<SubtitleCue>> {
    let content = fs::read_to_string(path).map_err(|e| DjiError::io(path, e))?;
    parse_srt(&content)
}

/// Parse SubRip content into cues, in file order
pub fn parse_srt(content: &str) -> DjiResult<Vec<SubtitleCue>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut cues = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                cues.push(parse_block(&block)?);
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        cues.push(parse_block(&block)?);
    }

    Ok(cues)
}

fn parse_block(lines: &[&str]) -> DjiResult<SubtitleCue> {
    let malformed = || DjiError::format(format!("malformed subtitle block:\n{}", lines.join("\n")));

    if lines.len() < 2 {
        return Err(malformed());
    }

    let index: u32 = lines[0].trim().parse().map_err(|_| malformed())?;
    let (start_ms, end_ms) = parse_timecode(lines[1].trim()).ok_or_else(malformed)?;

    Ok(SubtitleCue {
        index,
        start_ms,
        end_ms,
        text: lines[2..].join("\n"),
    })
}

/// `None` on a mismatch or when a timecode does not fit in `u64` milliseconds
fn parse_timecode(line: &str) -> Option<(u64, u64)> {
    let caps = TIMECODE_RE.captures(line)?;
    let field = |i: usize| caps[i].parse::<u64>().ok();
    let millis = |first: usize| -> Option<u64> {
        field(first)?
            .checked_mul(3_600_000)?
            .checked_add(field(first + 1)?.checked_mul(60_000)?)?
            .checked_add(field(first + 2)?.checked_mul(1000)?)?
            .checked_add(field(first + 3)?)
    };

    Some((millis(1)?, millis(5)?))
}
