//! Inventory scanner
//!
//! Video files anchor the inventory. Proxies and subtitles only count when
//! a video shares their base name.

use crate::domain::model::{FileCategory, FileEntry};
use crate::domain::rules::{classify_extension, derive_index, inventory_order};
use crate::error::DjiResult;
use crate::filter::DateFilter;
use crate::ports::FsPort;
use crate::utils::path::{is_hidden, split_file_name};
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lists a clip directory and correlates sibling files
pub struct InventoryScanner {
    fs_port: Arc<dyn FsPort>,
}

impl InventoryScanner {
    pub fn new(fs_port: Arc<dyn FsPort>) -> Self {
        Self { fs_port }
    }

    /// Scan `dir` (already resolved) into entries ordered by creation time
    /// then ordinal index.
    ///
    /// `date_filter` is applied as metadata is read, before sorting. Files
    /// whose metadata cannot be read are skipped with a warning.
    pub fn scan(&self, dir: &Path, date_filter: Option<&DateFilter>) -> DjiResult<Vec<FileEntry>> {
        let names = self.fs_port.list_dir(dir)?;

        let mut videos: BTreeSet<(String, String)> = BTreeSet::new();
        let mut proxies: HashMap<String, String> = HashMap::new();
        let mut subtitles: HashMap<String, String> = HashMap::new();
        for name in names {
            if is_hidden(&name) {
                continue;
            }
            let (base, ext) = split_file_name(&name);
            match classify_extension(ext) {
                Some(FileCategory::Video) => {
                    videos.insert((base.to_string(), ext.to_string()));
                }
                Some(FileCategory::Proxy) => {
                    proxies.entry(base.to_string()).or_insert_with(|| name.clone());
                }
                Some(FileCategory::Subtitle) => {
                    subtitles.entry(base.to_string()).or_insert_with(|| name.clone());
                }
                None => {}
            }
        }
        debug!(
            "Found {} videos, {} proxies, {} subtitles in {}",
            videos.len(),
            proxies.len(),
            subtitles.len(),
            dir.display()
        );

        let mut entries = Vec::with_capacity(videos.len());
        for (base_name, extension) in videos {
            let path = dir.join(format!("{}{}", base_name, extension));
            let metadata = match self.fs_port.metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            if date_filter.is_some_and(|filter| !filter.matches(&metadata.created)) {
                continue;
            }

            entries.push(FileEntry {
                index: derive_index(&base_name),
                proxy_file: proxies.get(&base_name).cloned(),
                subtitle_file: subtitles.get(&base_name).cloned(),
                base_name,
                extension,
                created: metadata.created,
                size_bytes: metadata.size,
            });
        }

        entries.sort_by(inventory_order);
        info!("Scanned {} clips in {}", entries.len(), dir.display());
        Ok(entries)
    }
}
