// Convert interactor - DJI subtitle files to GPX tracks

use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use tracing::info;
use walkdir::WalkDir;

use crate::domain::rules::{SUBTITLE_EXTENSION, TRACK_EXTENSION};
use crate::error::{DjiError, DjiResult};
use crate::output::TrackDocument;
use crate::subtitle::read_telemetry;
use crate::utils::path::{has_extension, replace_extension};

/// One subtitle file and the track it is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub srt_path: PathBuf,
    pub gpx_path: PathBuf,
}

/// Outcome of one converted file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub job: ConversionJob,
    pub points: usize,
}

/// Work out which files a conversion reads and writes.
///
/// A directory expands to every subtitle file directly inside it, each
/// written next to its source; an explicit output path is then ambiguous
/// and rejected.
pub fn plan_conversions(srt_path: &Path, gpx_path: Option<&Path>) -> DjiResult<Vec<ConversionJob>> {
    if !srt_path.is_dir() {
        let gpx_path = gpx_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| replace_extension(srt_path, TRACK_EXTENSION));
        return Ok(vec![ConversionJob {
            srt_path: srt_path.to_path_buf(),
            gpx_path,
        }]);
    }

    if gpx_path.is_some() {
        return Err(DjiError::usage(format!(
            "an output path cannot be given when converting the directory {}",
            srt_path.display()
        )));
    }

    let mut jobs = Vec::new();
    for entry in WalkDir::new(srt_path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(srt_path).to_path_buf();
            DjiError::io(path, e.into())
        })?;
        let path = entry.path();
        if path.is_file() && has_extension(path, SUBTITLE_EXTENSION) {
            jobs.push(ConversionJob {
                srt_path: path.to_path_buf(),
                gpx_path: replace_extension(path, TRACK_EXTENSION),
            });
        }
    }
    Ok(jobs)
}

/// Interactor for the subtitle to GPX conversion use case
pub struct ConvertInteractor<Tz: TimeZone> {
    zone: Tz,
}

impl ConvertInteractor<Local> {
    /// Interpret subtitle timestamps in the machine's time zone
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz: TimeZone> ConvertInteractor<Tz> {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    /// Convert a subtitle file, or every subtitle file in a directory
    pub fn execute(&self, srt_path: &Path, gpx_path: Option<&Path>) -> DjiResult<Vec<ConversionReport>> {
        let jobs = plan_conversions(srt_path, gpx_path)?;
        if jobs.is_empty() {
            info!("No subtitle files found in {}", srt_path.display());
        }
        jobs.into_iter().map(|job| self.convert_file(job)).collect()
    }

    /// Decode, build and write one track
    pub fn convert_file(&self, job: ConversionJob) -> DjiResult<ConversionReport> {
        info!("Loading records from {}", job.srt_path.display());
        let records = read_telemetry(&job.srt_path)?;
        info!("Loaded {} records from {}", records.len(), job.srt_path.display());

        let document = TrackDocument::from_records(&records, &self.zone)?;
        document.write_to(&job.gpx_path)?;
        info!("Wrote {}", job.gpx_path.display());

        Ok(ConversionReport {
            points: document.points.len(),
            job,
        })
    }
}
