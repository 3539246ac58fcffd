//! rsync execution adapter
//!
//! Bulk copies are delegated to `rsync`, fed an explicit file list on stdin.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{DjiError, DjiResult};
use crate::ports::CopyPort;

/// rsync-based copy adapter
#[derive(Debug, Clone)]
pub struct RsyncAdapter {
    program: OsString,
}

impl Default for RsyncAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RsyncAdapter {
    /// Create adapter using `rsync` from `PATH`
    pub fn new() -> Self {
        Self::with_program("rsync")
    }

    /// Create adapter using a specific rsync binary
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one invocation; the file list is read from stdin
    fn build_args(source_dir: &Path, destination: &Path) -> Vec<OsString> {
        // Trailing separators make rsync copy directory contents
        let mut source = source_dir.as_os_str().to_os_string();
        source.push("/");
        let mut dest = destination.as_os_str().to_os_string();
        dest.push("/");

        vec![
            "--archive".into(),
            "--human-readable".into(),
            "--progress".into(),
            "--files-from=-".into(),
            source,
            dest,
        ]
    }
}

impl CopyPort for RsyncAdapter {
    fn copy_files(&self, source_dir: &Path, files: &[String], destination: &Path) -> DjiResult<()> {
        let args = Self::build_args(source_dir, destination);
        debug!("Running {:?} {:?}", self.program, args);
        info!("Copying {} files to {}", files.len(), destination.display());

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| DjiError::Command {
                message: format!("failed to start {:?}: {}", self.program, e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            let list = files.join("\n") + "\n";
            stdin.write_all(list.as_bytes()).map_err(|e| DjiError::Command {
                message: format!("failed to send file list to {:?}: {}", self.program, e),
            })?;
        }

        let status = child.wait().map_err(|e| DjiError::Command {
            message: format!("failed to wait for {:?}: {}", self.program, e),
        })?;
        if !status.success() {
            return Err(DjiError::Command {
                message: format!("{:?} exited with {}", self.program, status),
            });
        }
        Ok(())
    }
}
