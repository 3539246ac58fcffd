// Import interactor - Copy selected clips off a card

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::app::list_interactor::{Inventory, ListInteractor};
use crate::error::DjiResult;
use crate::filter::Selection;
use crate::ports::{ConfirmPort, CopyPort, FileBatch, FsPort};

/// Which siblings travel with the videos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOptions {
    pub include_subtitles: bool,
    pub include_proxies: bool,
}

/// Outcome of an import run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub copied: Vec<String>,
    pub destination: PathBuf,
    pub cancelled: bool,
}

/// Interactor for the import use case
pub struct ImportInteractor {
    list: ListInteractor,
    fs_port: Arc<dyn FsPort>,
    copy_port: Arc<dyn CopyPort>,
    confirm_port: Arc<dyn ConfirmPort>,
}

impl ImportInteractor {
    pub fn new(
        fs_port: Arc<dyn FsPort>,
        copy_port: Arc<dyn CopyPort>,
        confirm_port: Arc<dyn ConfirmPort>,
    ) -> Self {
        Self {
            list: ListInteractor::new(Arc::clone(&fs_port)),
            fs_port,
            copy_port,
            confirm_port,
        }
    }

    /// Copy the selected clips to `destination`, creating it if needed
    pub fn execute(
        &self,
        root: &Path,
        destination: &Path,
        selection: &Selection,
        options: ImportOptions,
    ) -> DjiResult<ImportReport> {
        let inventory = self.list.execute(root, selection)?;
        let batch = files_to_import(&inventory, options);
        let mut report = ImportReport {
            destination: destination.to_path_buf(),
            ..ImportReport::default()
        };
        if batch.is_empty() {
            info!("Nothing to import from {}", inventory.dir.display());
            return Ok(report);
        }

        let question = format!("Import {} files to {}?", batch.files.len(), destination.display());
        if !self.confirm_port.confirm(&question, true)? {
            info!("Import cancelled");
            report.cancelled = true;
            return Ok(report);
        }

        self.fs_port.create_directory(destination)?;
        for path in batch.paths() {
            debug!("Queued {}", path.display());
        }
        self.copy_port.copy_files(&batch.dir, &batch.files, destination)?;
        info!("Imported {} files to {}", batch.files.len(), destination.display());

        report.copied = batch.files;
        Ok(report)
    }
}

/// File names to copy, relative to the clip directory
pub fn files_to_import(inventory: &Inventory, options: ImportOptions) -> FileBatch {
    let mut files = Vec::new();
    for entry in &inventory.entries {
        files.push(entry.file_name());
        if options.include_subtitles {
            files.extend(entry.subtitle_file.clone());
        }
        if options.include_proxies {
            files.extend(entry.proxy_file.clone());
        }
    }
    FileBatch {
        dir: inventory.dir.clone(),
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StdFsAdapter;
    use crate::error::DjiError;
    use crate::ports::AssumeYes;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records calls instead of spawning rsync
    #[derive(Default)]
    struct RecordingCopy {
        calls: Mutex<Vec<(PathBuf, Vec<String>, PathBuf)>>,
    }

    impl CopyPort for RecordingCopy {
        fn copy_files(&self, source_dir: &Path, files: &[String], destination: &Path) -> DjiResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push((source_dir.to_path_buf(), files.to_vec(), destination.to_path_buf()));
            Ok(())
        }
    }

    fn card() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in ["DJI_0001.MP4", "DJI_0001.LRF", "DJI_0001.SRT", "DJI_0002.MP4"] {
            fs::write(dir.path().join(name), b"data").unwrap();
        }
        dir
    }

    #[test]
    fn test_import_with_subtitles() {
        let source = card();
        let target = TempDir::new().unwrap();
        let destination = target.path().join("footage/2023");
        let copy = Arc::new(RecordingCopy::default());
        let interactor = ImportInteractor::new(Arc::new(StdFsAdapter::new()), copy.clone(), Arc::new(AssumeYes));

        let options = ImportOptions {
            include_subtitles: true,
            include_proxies: false,
        };
        let report = interactor
            .execute(source.path(), &destination, &Selection::All, options)
            .unwrap();

        assert!(destination.is_dir());
        let mut copied = report.copied.clone();
        copied.sort();
        assert_eq!(copied, vec!["DJI_0001.MP4", "DJI_0001.SRT", "DJI_0002.MP4"]);

        let calls = copy.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, source.path());
        assert_eq!(calls[0].2, destination);
    }

    #[test]
    fn test_import_uncreatable_destination_is_io_error() {
        let source = card();
        let blocker = source.path().join("DJI_0002.MP4");
        let interactor = ImportInteractor::new(
            Arc::new(StdFsAdapter::new()),
            Arc::new(RecordingCopy::default()),
            Arc::new(AssumeYes),
        );

        let err = interactor
            .execute(source.path(), &blocker.join("sub"), &Selection::All, ImportOptions::default())
            .unwrap_err();
        assert!(matches!(err, DjiError::Io { .. }));
    }

    #[test]
    fn test_files_to_import_videos_only_by_default() {
        let source = card();
        let list = ListInteractor::new(Arc::new(StdFsAdapter::new()));
        let inventory = list.execute(source.path(), &Selection::All).unwrap();

        let mut files = files_to_import(&inventory, ImportOptions::default()).files;
        files.sort();
        assert_eq!(files, vec!["DJI_0001.MP4", "DJI_0002.MP4"]);
    }
}
