// Ports - Interface definitions for the collaborators the core calls out to

use crate::error::DjiResult;
use chrono::{DateTime, Local};
use std::io;
use std::path::{Path, PathBuf};

/// Metadata the inventory needs for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadata {
    pub created: DateTime<Local>,
    pub size: u64,
}

/// Port for directory listing and file metadata
pub trait FsPort: Send + Sync {
    /// Names of the immediate children of a directory
    fn list_dir(&self, dir_path: &Path) -> DjiResult<Vec<String>>;

    /// Creation time and size of one file
    fn metadata(&self, file_path: &Path) -> io::Result<FileMetadata>;

    /// Delete one file
    fn delete_file(&self, file_path: &Path) -> DjiResult<()>;

    /// Create directory (including parent directories)
    fn create_directory(&self, dir_path: &Path) -> DjiResult<()>;
}

/// Port for yes/no confirmation
pub trait ConfirmPort: Send + Sync {
    /// Ask a question; `default` is returned on an empty answer
    fn confirm(&self, question: &str, default: bool) -> DjiResult<bool>;
}

/// Port for bulk copies performed by an external tool
pub trait CopyPort: Send + Sync {
    /// Copy `files` (names relative to `source_dir`) into `destination`
    fn copy_files(&self, source_dir: &Path, files: &[String], destination: &Path) -> DjiResult<()>;
}

/// Confirmation that always answers yes, for `--yes`
pub struct AssumeYes;

impl ConfirmPort for AssumeYes {
    fn confirm(&self, _question: &str, _default: bool) -> DjiResult<bool> {
        Ok(true)
    }
}

/// Paths selected for a batch operation, relative to one directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBatch {
    pub dir: PathBuf,
    pub files: Vec<String>,
}

impl FileBatch {
    pub fn paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|name| self.dir.join(name))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
