use assert_cmd::Command;
use chrono::Utc;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use djiutil::app::convert_interactor::plan_conversions;
use djiutil::subtitle::read_telemetry;
use djiutil::*;

/// Test fixtures for DJI cards
mod test_utils {
    use super::*;

    /// Subtitle file with `frames` consecutive telemetry cues
    pub fn srt_content(frames: u32) -> String {
        let mut content = String::new();
        for frame in 1..=frames {
            let start = (frame - 1) * 33;
            let end = frame * 33;
            content.push_str(&format!(
                "{frame}\n00:00:00,{start:03} --> 00:00:00,{end:03}\n\
                 <font size=\"28\">FrameCnt: {frame}, DiffTime: 33ms\n\
                 2023-08-28 17:26:58.{ms:03}\n\
                 [iso: 100] [shutter: 1/1000.0] [fnum: 1.7] [ev: 0] [ct: 5500] [color_md: default] [focal_len: 24.00] \
                 [latitude: 34.0{frame}] [longitude: -118.2{frame}] [rel_alt: 1.{frame} abs_alt: 90.3]</font>\n\n",
                ms = frame * 10,
            ));
        }
        content
    }

    /// Card layout `DCIM/DJI_001` holding the given files
    pub fn create_card(files: &[&str]) -> (TempDir, PathBuf) {
        let card = TempDir::new().unwrap();
        let clips = card.path().join("DCIM").join("DJI_001");
        fs::create_dir_all(&clips).unwrap();
        for name in files {
            fs::write(clips.join(name), b"footage").unwrap();
        }
        (card, clips)
    }

    /// The binary with configuration isolated from the host
    pub fn djiutil(config_dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("djiutil").unwrap();
        cmd.env("DJIUTIL_CONFIG", config_dir.join("missing.toml"))
            .env_remove("DJIUTIL_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn track_point_count(gpx: &Path) -> usize {
        let xml = fs::read_to_string(gpx).unwrap();
        let doc = roxmltree::Document::parse(&xml).unwrap();
        doc.descendants().filter(|n| n.has_tag_name("trkpt")).count()
    }
}

use test_utils::*;

#[test]
fn test_telemetry_to_track_document() {
    let dir = TempDir::new().unwrap();
    let srt = dir.path().join("DJI_0001.SRT");
    fs::write(&srt, srt_content(3)).unwrap();

    let records = read_telemetry(&srt).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2].frame_count, 3);
    assert_eq!(records[0].get("iso"), Some(&TagValue::Int(100)));
    assert_eq!(records[0].get("shutter"), Some(&TagValue::Text("1/1000.0".to_string())));

    let document = TrackDocument::from_records(&records, &Utc).unwrap();
    let xml = document.to_xml();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "gpx");
    assert_eq!(root.attribute("version"), Some("1.1"));
    assert_eq!(root.attribute("creator"), Some("djiutil"));

    let points: Vec<_> = doc.descendants().filter(|n| n.has_tag_name("trkpt")).collect();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].attribute("lat"), Some("34.01"));
    assert_eq!(points[0].attribute("lon"), Some("-118.21"));
    let time = points[0].children().find(|n| n.has_tag_name("time")).unwrap();
    assert_eq!(time.text(), Some("2023-08-28T17:26:58Z"));
    let ele = points[1].children().find(|n| n.has_tag_name("ele")).unwrap();
    assert_eq!(ele.text(), Some("1.2"));
}

#[test]
fn test_convert_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("DJI_0001.SRT"), srt_content(2)).unwrap();
    fs::write(dir.path().join("DJI_0002.srt"), srt_content(4)).unwrap();
    fs::write(dir.path().join("DJI_0001.MP4"), b"footage").unwrap();

    djiutil(dir.path())
        .arg("convert")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(4 points)"));

    assert_eq!(track_point_count(&dir.path().join("DJI_0001.gpx")), 2);
    assert_eq!(track_point_count(&dir.path().join("DJI_0002.gpx")), 4);
    assert!(!dir.path().join("DJI_0001.MP4.gpx").exists());
}

#[test]
fn test_convert_directory_with_output_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("DJI_0001.SRT"), srt_content(1)).unwrap();

    assert!(matches!(
        plan_conversions(dir.path(), Some(&dir.path().join("out.gpx"))),
        Err(DjiError::Usage { .. })
    ));
    djiutil(dir.path())
        .arg("convert")
        .arg(dir.path())
        .arg(dir.path().join("out.gpx"))
        .assert()
        .failure();
    assert!(!dir.path().join("DJI_0001.gpx").exists());
}

#[test]
fn test_convert_frame_gap_fails() {
    let dir = TempDir::new().unwrap();
    let srt = dir.path().join("DJI_0001.SRT");
    let content = srt_content(3).replace("FrameCnt: 2,", "FrameCnt: 5,");
    fs::write(&srt, content).unwrap();

    djiutil(dir.path())
        .arg("convert")
        .arg(&srt)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 2 but got 5"));
    assert!(!dir.path().join("DJI_0001.gpx").exists());
}

#[test]
fn test_list_card_as_json() {
    let (card, _clips) = create_card(&["DJI_0001.MP4", "DJI_0001.LRF", "DJI_0002.MP4", "DJI_0002.SRT", "notes.txt"]);

    let output = djiutil(card.path())
        .args(["list", "--format", "json", "--index", "2", "--dir"])
        .arg(card.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["base_name"], "DJI_0002");
    assert_eq!(entries[0]["subtitle_file"], "DJI_0002.SRT");
    assert!(entries[0]["proxy_file"].is_null());
}

#[test]
fn test_list_text_uses_environment_dir() {
    let (card, _clips) = create_card(&["DJI_0001.MP4", "DJI_0001.LRF", "DJI_0001.SRT"]);

    djiutil(card.path())
        .arg("list")
        .env("DJIUTIL_DIR", card.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 [LRF] [SRT]"));
}

#[test]
fn test_list_dir_from_config_file() {
    let (card, clips) = create_card(&[]);
    let config = card.path().join("config.toml");
    fs::write(&config, format!("[djiutil]\ndir = {:?}\n", clips.display().to_string())).unwrap();

    djiutil(card.path())
        .arg("list")
        .env("DJIUTIL_CONFIG", &config)
        .assert()
        .success()
        .stdout(predicate::str::contains("No DJI files found in directory"));
}

#[test]
fn test_missing_dir_is_usage_error() {
    let scratch = TempDir::new().unwrap();
    djiutil(scratch.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no directory given"));
}

#[test]
fn test_date_and_index_rejected_before_io() {
    let scratch = TempDir::new().unwrap();
    let config = scratch.path().join("broken.toml");
    fs::write(&config, "this is not toml [").unwrap();

    djiutil(scratch.path())
        .args(["list", "--dir", "/does/not/exist", "--date", "2023-08-28", "--index", "1"])
        .env("DJIUTIL_CONFIG", &config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be combined"));
}

#[test]
fn test_clean_yes_deletes_proxies() {
    let (card, clips) = create_card(&["DJI_0001.MP4", "DJI_0001.LRF", "DJI_0002.MP4", "DJI_0002.LRF", "DJI_0002.SRT"]);

    djiutil(card.path())
        .args(["clean", "--yes", "--dir"])
        .arg(card.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 files"));

    assert!(!clips.join("DJI_0001.LRF").exists());
    assert!(!clips.join("DJI_0002.LRF").exists());
    assert!(clips.join("DJI_0001.MP4").exists());
    assert!(clips.join("DJI_0002.SRT").exists());
}

#[test]
fn test_clean_defaults_to_no() {
    let (card, clips) = create_card(&["DJI_0001.MP4", "DJI_0001.LRF"]);

    djiutil(card.path())
        .args(["clean", "--all", "--dir"])
        .arg(card.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    assert!(clips.join("DJI_0001.LRF").exists());
    assert!(clips.join("DJI_0001.MP4").exists());
}

#[test]
fn test_selection_filters() {
    let selection = Selection::from_exprs(None, Some("1,3-4")).unwrap();
    match &selection {
        Selection::Indices(filter) => assert_eq!(filter.ranges(), &[1..=1, 3..=4]),
        other => panic!("unexpected selection {other:?}"),
    }
    assert!(matches!(Selection::from_exprs(Some("<0d"), None), Err(DjiError::Value { .. })));
    assert!(matches!(Selection::from_exprs(None, Some("4-1")), Err(DjiError::Value { .. })));
    assert!(matches!(OutputFormat::parse("xml"), Err(DjiError::Value { .. })));
}
