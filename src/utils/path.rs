//! Path utilities for sibling-file handling

use std::path::{Path, PathBuf};

/// Split a file name into base name and extension (with its dot).
///
/// A leading dot does not start an extension, so `.hidden` has none.
pub fn split_file_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 && !name[..pos].chars().all(|c| c == '.') => name.split_at(pos),
        _ => (name, ""),
    }
}

/// Dot-prefixed names are skipped when scanning a card
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check a path's extension case-insensitively (without the dot)
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

/// Replace a path's extension
pub fn replace_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}
