//! Directory tree walking logic
//!
//! One walker, two callbacks: directories are announced before they are
//! enumerated, and leaves (matching files, or directories cut off by the
//! depth limit) are reported as they are found. Filtering is by base name
//! only; branches that cannot be read are recorded and skipped rather than
//! failing the walk.

mod config;
mod filter;
mod report;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use filter::EntryFilter;
pub use report::{BranchFailure, Leaf, WalkReport};
pub use walker::Walker;
