//! Shared helper functions for tree walking

use std::path::Path;

/// Get the base name of a path, defaulting to "." when there is no final
/// component.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Extension of a file name: the substring after the last `.`, lowercased.
///
/// A name with no dot, or ending in a bare dot, has no extension.
pub fn file_ext(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
