// Standard filesystem adapter - Directory listing and file operations via std::fs

use crate::error::{DjiError, DjiResult};
use crate::ports::*;
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Filesystem adapter backed by `std::fs`
#[derive(Debug, Default)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for StdFsAdapter {
    fn list_dir(&self, dir_path: &Path) -> DjiResult<Vec<String>> {
        let entries = fs::read_dir(dir_path).map_err(|e| DjiError::io(dir_path, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DjiError::io(dir_path, e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn metadata(&self, file_path: &Path) -> io::Result<FileMetadata> {
        let metadata = fs::metadata(file_path)?;
        // Some filesystems do not record a birth time
        let created = metadata.created().or_else(|_| metadata.modified())?;
        Ok(FileMetadata {
            created: DateTime::<Local>::from(created),
            size: metadata.len(),
        })
    }

    fn delete_file(&self, file_path: &Path) -> DjiResult<()> {
        debug!("Deleting {}", file_path.display());
        fs::remove_file(file_path).map_err(|e| DjiError::io(file_path, e))
    }

    fn create_directory(&self, dir_path: &Path) -> DjiResult<()> {
        fs::create_dir_all(dir_path).map_err(|e| DjiError::io(dir_path, e))
    }
}
