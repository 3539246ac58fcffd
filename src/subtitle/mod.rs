//! Subtitle handling: SubRip cue reading and DJI telemetry decoding

pub mod decoder;
pub mod srt;

pub use decoder::{decode_cue, decode_cues, read_telemetry};
pub use srt::{parse_srt, read_srt_file, SubtitleCue};
