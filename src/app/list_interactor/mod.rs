// List interactor - Resolve, scan and filter a clip directory

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::model::FileEntry;
use crate::error::DjiResult;
use crate::filter::Selection;
use crate::inventory::{resolve_clip_directory, InventoryScanner};
use crate::ports::FsPort;

/// Selected clips and the directory they live in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub dir: PathBuf,
    pub entries: Vec<FileEntry>,
}

/// Interactor for the inventory listing use case
pub struct ListInteractor {
    fs_port: Arc<dyn FsPort>,
    scanner: InventoryScanner,
}

impl ListInteractor {
    pub fn new(fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            scanner: InventoryScanner::new(Arc::clone(&fs_port)),
            fs_port,
        }
    }

    /// Scan `root` (a card, its `DCIM` folder or the clip folder itself)
    /// and keep the clips matching `selection`
    pub fn execute(&self, root: &Path, selection: &Selection) -> DjiResult<Inventory> {
        let dir = resolve_clip_directory(self.fs_port.as_ref(), root);
        let entries = self.scanner.scan(&dir, selection.date_filter())?;
        let entries = selection.apply(entries);
        info!("Selected {} clips from {}", entries.len(), dir.display());
        Ok(Inventory { dir, entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StdFsAdapter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lists_card_root() {
        let card = TempDir::new().unwrap();
        let clips = card.path().join("DCIM/DJI_001");
        fs::create_dir_all(&clips).unwrap();
        for name in ["DJI_0001.MP4", "DJI_0001.LRF", "DJI_0002.MP4", "DJI_0002.SRT"] {
            fs::write(clips.join(name), b"data").unwrap();
        }

        let interactor = ListInteractor::new(Arc::new(StdFsAdapter::new()));
        let inventory = interactor.execute(card.path(), &Selection::All).unwrap();
        assert_eq!(inventory.dir, clips);
        assert_eq!(inventory.entries.len(), 2);

        let selection = Selection::from_exprs(None, Some("2")).unwrap();
        let inventory = interactor.execute(card.path(), &selection).unwrap();
        assert_eq!(inventory.entries.len(), 1);
        assert_eq!(inventory.entries[0].file_name(), "DJI_0002.MP4");
        assert!(inventory.entries[0].has_subtitle());
    }
}
