//! Entry filtering for tree walking

use std::collections::HashSet;

use super::config::WalkerConfig;
use super::utils::file_ext;

/// Name-based filter deciding which entries a walk may touch.
///
/// Every check operates on an entry's base name; where the entry sits in
/// the tree never matters.
pub struct EntryFilter {
    extensions: HashSet<String>,
    ignore_names: HashSet<String>,
    include_dot_entries: bool,
}

impl EntryFilter {
    pub fn new(config: &WalkerConfig) -> Self {
        Self {
            extensions: config.extensions.iter().cloned().collect(),
            ignore_names: config.ignore_names.iter().cloned().collect(),
            include_dot_entries: config.include_dot_entries,
        }
    }

    /// Check if an entry is excluded from the walk outright.
    pub fn excludes(&self, name: &str) -> bool {
        if !self.include_dot_entries && name.starts_with('.') {
            return true;
        }
        self.ignore_names.contains(name)
    }

    /// Check if a file name carries an accepted extension.
    ///
    /// Names without an extension never match.
    pub fn matches_extension(&self, name: &str) -> bool {
        file_ext(name).is_some_and(|ext| self.extensions.contains(&ext))
    }
}
