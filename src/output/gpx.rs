//! GPX 1.1 track writer
//!
//! Builds one track with one segment holding a point per telemetry record,
//! in record order. Serialization is hand-rolled so the byte layout is fixed:
//! the same records always produce the same document.

use crate::domain::model::TelemetryRecord;
use crate::error::{DjiError, DjiResult};
use chrono::{TimeZone, Utc};
use std::fs;
use std::path::Path;

pub const GPX_VERSION: &str = "1.1";
pub const GPX_CREATOR: &str = "djiutil";
// GPX 1.1 defines its namespace with http; the https form is not recognised by readers
pub const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
pub const GPX_SCHEMA_LOCATION: &str =
    "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd";

const GPX_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const TRACK_NAME: &str = "Track 1";
const ELEVATION_KEY: &str = "rel_alt";

/// A single `trkpt`, already rendered to text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackPoint {
    pub lat: String,
    pub lon: String,
    /// UTC time, `YYYY-MM-DDTHH:MM:SSZ`
    pub time: String,
    pub elevation: Option<String>,
}

/// In-memory GPX document: one track, one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDocument {
    pub name: String,
    pub points: Vec<TrackPoint>,
}

impl TrackDocument {
    /// Build a document from decoded records.
    ///
    /// Record timestamps are read as wall-clock time in `zone` and written
    /// as UTC.
    pub fn from_records<Tz: TimeZone>(records: &[TelemetryRecord], zone: &Tz) -> DjiResult<Self> {
        let points = records
            .iter()
            .map(|record| track_point(record, zone))
            .collect::<DjiResult<Vec<_>>>()?;

        Ok(Self {
            name: TRACK_NAME.to_string(),
            points,
        })
    }

    /// Serialize to GPX XML
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!(
            "<gpx version=\"{}\" creator=\"{}\" xmlns=\"{}\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:schemaLocation=\"{}\">\n",
            GPX_VERSION, GPX_CREATOR, GPX_NAMESPACE, GPX_SCHEMA_LOCATION
        ));
        xml.push_str("  <trk>\n");
        xml.push_str(&format!("    <name>{}</name>\n", escape_xml(&self.name)));
        xml.push_str("    <trkseg>\n");

        for point in &self.points {
            xml.push_str(&format!(
                "      <trkpt lat=\"{}\" lon=\"{}\">\n",
                escape_xml(&point.lat),
                escape_xml(&point.lon)
            ));
            xml.push_str(&format!("        <time>{}</time>\n", point.time));
            if let Some(elevation) = &point.elevation {
                xml.push_str(&format!("        <ele>{}</ele>\n", escape_xml(elevation)));
            }
            xml.push_str("      </trkpt>\n");
        }

        xml.push_str("    </trkseg>\n");
        xml.push_str("  </trk>\n");
        xml.push_str("</gpx>\n");

        xml
    }

    /// Write the serialized document to a file
    pub fn write_to(&self, path: &Path) -> DjiResult<()> {
        fs::write(path, self.to_xml()).map_err(|e| DjiError::io(path, e))
    }
}

fn track_point<Tz: TimeZone>(record: &TelemetryRecord, zone: &Tz) -> DjiResult<TrackPoint> {
    let coordinate = |field: &str| {
        record
            .get(field)
            .map(|value| value.to_string())
            .ok_or_else(|| DjiError::MalformedRecord {
                frame: record.frame_count,
                field: field.to_string(),
            })
    };
    let lat = coordinate("latitude")?;
    let lon = coordinate("longitude")?;

    let local = zone
        .from_local_datetime(&record.timestamp)
        .earliest()
        .ok_or_else(|| {
            DjiError::format(format!(
                "timestamp {} does not exist in the local time zone",
                record.timestamp
            ))
        })?;
    let time = local.with_timezone(&Utc).format(GPX_DATETIME_FORMAT).to_string();

    Ok(TrackPoint {
        lat,
        lon,
        time,
        elevation: record.get(ELEVATION_KEY).map(|value| value.to_string()),
    })
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
