//! Walk outcome types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A node reported through the leaf callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    /// Regular file that passed the ignore, dotfile, and extension filters.
    Matched(PathBuf),
    /// Directory sitting beyond the depth limit, reported instead of entered.
    Truncated(PathBuf),
}

impl Leaf {
    pub fn path(&self) -> &Path {
        match self {
            Leaf::Matched(path) | Leaf::Truncated(path) => path,
        }
    }

    pub fn into_path(self) -> PathBuf {
        match self {
            Leaf::Matched(path) | Leaf::Truncated(path) => path,
        }
    }

    /// True when this leaf is a directory left unexpanded by the depth limit.
    pub fn is_truncated(&self) -> bool {
        matches!(self, Leaf::Truncated(_))
    }
}

/// A directory whose contents could not be enumerated.
///
/// The walk abandons the branch and keeps going; failures accumulate on the
/// [`WalkReport`] so callers can inspect them after the fact.
#[derive(Debug, Error)]
#[error("failed to read directory '{path}': {source}")]
pub struct BranchFailure {
    /// Directory that could not be read.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// Outcome of a single walk.
#[derive(Debug, Default)]
pub struct WalkReport {
    /// Branches abandoned because their directory could not be read.
    pub failures: Vec<BranchFailure>,
}

impl WalkReport {
    /// True when every reachable branch was enumerated without error.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
