//! Clip directory resolution
//!
//! Cards are usually mounted at their root, while DJI firmware writes clips
//! to `DCIM/DJI_001`. Users may pass either.

use crate::ports::FsPort;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level directory created by the camera
pub const DCIM_DIR: &str = "DCIM";
/// First clip folder inside `DCIM`
pub const FIRST_CARD_DIR: &str = "DJI_001";

/// Descend from `root` through `DCIM` and `DJI_001` while they exist.
///
/// Never fails: an unreadable directory or a missing marker stops the
/// descent and the deepest matching path is returned.
pub fn resolve_clip_directory(fs: &dyn FsPort, root: &Path) -> PathBuf {
    let mut dir = root.to_path_buf();
    for marker in [DCIM_DIR, FIRST_CARD_DIR] {
        let contains_marker = fs
            .list_dir(&dir)
            .map(|names| names.iter().any(|name| name == marker))
            .unwrap_or(false);
        if !contains_marker {
            break;
        }
        dir.push(marker);
    }
    debug!("Resolved clip directory {} -> {}", root.display(), dir.display());
    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StdFsAdapter;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_descends_through_both_markers() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("DCIM/DJI_001")).unwrap();

        let resolved = resolve_clip_directory(&StdFsAdapter::new(), root.path());
        assert_eq!(resolved, root.path().join("DCIM").join("DJI_001"));
    }

    #[test]
    fn test_stops_after_dcim() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("DCIM/DJI_002")).unwrap();

        let resolved = resolve_clip_directory(&StdFsAdapter::new(), root.path());
        assert_eq!(resolved, root.path().join("DCIM"));
    }

    #[test]
    fn test_leaf_directory_unchanged() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("DJI_0001.MP4"), b"x").unwrap();

        let resolved = resolve_clip_directory(&StdFsAdapter::new(), root.path());
        assert_eq!(resolved, root.path());
    }

    #[test]
    fn test_missing_directory_unchanged() {
        let root = TempDir::new().unwrap();
        let missing = root.path().join("nope");

        assert_eq!(resolve_clip_directory(&StdFsAdapter::new(), &missing), missing);
    }
}
