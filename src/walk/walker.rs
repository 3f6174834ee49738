//! Walker - recursive depth-first descent with per-branch callbacks

use std::fs;
use std::path::Path;

use super::config::WalkerConfig;
use super::filter::EntryFilter;
use super::report::{BranchFailure, Leaf, WalkReport};
use super::utils::base_name;

/// Depth-bounded directory tree walker.
///
/// Holds only the resolved filter configuration; each walk carries its own
/// depth counter, so one walker can serve any number of traversals.
pub struct Walker {
    filter: EntryFilter,
    max_depth: i32,
}

impl Walker {
    /// Build a walker from a configuration.
    ///
    /// Construction never fails; a negative `max_depth` just causes the
    /// root itself to be reported as a truncated leaf.
    pub fn new(config: &WalkerConfig) -> Self {
        Self {
            filter: EntryFilter::new(config),
            max_depth: config.max_depth,
        }
    }

    /// Walk the tree rooted at `root`, depth-first.
    ///
    /// `on_leaf` receives every accepted file as [`Leaf::Matched`] and every
    /// depth-truncated directory as [`Leaf::Truncated`]. `on_dir` runs for a
    /// directory before its contents are enumerated; returning an error
    /// prunes that branch without failing the walk, and the error value is
    /// discarded (callers that never prune can use
    /// [`std::convert::Infallible`]).
    ///
    /// Directories that cannot be read are logged, recorded on the returned
    /// [`WalkReport`], and skipped; sibling branches keep going.
    pub fn walk<L, D, E>(&self, root: &Path, mut on_leaf: L, mut on_dir: D) -> WalkReport
    where
        L: FnMut(Leaf),
        D: FnMut(&Path) -> Result<(), E>,
    {
        let mut report = WalkReport::default();
        self.walk_dir(root, 0, &mut on_leaf, &mut on_dir, &mut report);
        report
    }

    fn walk_dir<L, D, E>(
        &self,
        dir: &Path,
        depth: i32,
        on_leaf: &mut L,
        on_dir: &mut D,
        report: &mut WalkReport,
    ) where
        L: FnMut(Leaf),
        D: FnMut(&Path) -> Result<(), E>,
    {
        if self.filter.excludes(&base_name(dir)) {
            return;
        }

        // Past the limit the node itself is the leaf; its contents are
        // never enumerated.
        if depth > self.max_depth {
            on_leaf(Leaf::Truncated(dir.to_path_buf()));
            return;
        }

        if on_dir(dir).is_err() {
            return;
        }

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                log::error!("failed to read directory {}: {}", dir.display(), err);
                report.failures.push(BranchFailure {
                    path: dir.to_path_buf(),
                    source: err,
                });
                return;
            }
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        for entry in entries {
            let entry_path = entry.path();

            // Classification does not follow symlinks, so a symlinked
            // directory falls through to file handling and never loops.
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                self.walk_dir(&entry_path, depth + 1, on_leaf, on_dir, report);
                continue;
            }

            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !self.filter.excludes(&name) && self.filter.matches_extension(&name) {
                on_leaf(Leaf::Matched(entry_path));
            }
        }
    }
}
