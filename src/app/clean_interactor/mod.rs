// Clean interactor - Delete proxies (or whole clips) from a card

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::app::list_interactor::{Inventory, ListInteractor};
use crate::error::DjiResult;
use crate::filter::Selection;
use crate::ports::{ConfirmPort, FsPort};

/// What to delete for each selected clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanScope {
    /// Only the low-resolution proxy
    Proxies,
    /// Video, proxy and subtitle
    AllFiles,
}

/// Outcome of a clean run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CleanReport {
    pub deleted: Vec<PathBuf>,
    pub cancelled: bool,
}

/// Interactor for the clean use case
pub struct CleanInteractor {
    list: ListInteractor,
    fs_port: Arc<dyn FsPort>,
    confirm_port: Arc<dyn ConfirmPort>,
}

impl CleanInteractor {
    pub fn new(fs_port: Arc<dyn FsPort>, confirm_port: Arc<dyn ConfirmPort>) -> Self {
        Self {
            list: ListInteractor::new(Arc::clone(&fs_port)),
            fs_port,
            confirm_port,
        }
    }

    /// Delete the files of the selected clips after confirmation.
    ///
    /// Stops at the first failed deletion; files removed before it stay
    /// removed.
    pub fn execute(&self, root: &Path, selection: &Selection, scope: CleanScope) -> DjiResult<CleanReport> {
        let inventory = self.list.execute(root, selection)?;
        let targets = files_to_delete(&inventory, scope);
        if targets.is_empty() {
            info!("Nothing to delete in {}", inventory.dir.display());
            return Ok(CleanReport::default());
        }

        let question = format!("Delete {} files from {}?", targets.len(), inventory.dir.display());
        if !self.confirm_port.confirm(&question, false)? {
            info!("Clean cancelled");
            return Ok(CleanReport {
                deleted: Vec::new(),
                cancelled: true,
            });
        }

        let mut deleted = Vec::with_capacity(targets.len());
        for path in targets {
            if let Err(e) = self.fs_port.delete_file(&path) {
                warn!("Stopped after deleting {} files", deleted.len());
                return Err(e);
            }
            deleted.push(path);
        }
        info!("Deleted {} files", deleted.len());
        Ok(CleanReport {
            deleted,
            cancelled: false,
        })
    }
}

/// Paths removed for each clip, in inventory order
pub fn files_to_delete(inventory: &Inventory, scope: CleanScope) -> Vec<PathBuf> {
    let dir = &inventory.dir;
    let mut paths = Vec::new();
    for entry in &inventory.entries {
        match scope {
            CleanScope::Proxies => paths.extend(entry.proxy_path(dir)),
            CleanScope::AllFiles => {
                paths.push(entry.video_path(dir));
                paths.extend(entry.proxy_path(dir));
                paths.extend(entry.subtitle_path(dir));
            }
        }
    }
    paths
}
