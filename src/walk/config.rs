//! Configuration types for the tree walker

/// Configuration for walk behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// File extensions to accept, lowercase, without the leading dot.
    /// An empty list accepts no file at all.
    pub extensions: Vec<String>,
    /// Base names to skip entirely, files and directories alike.
    /// An ignored directory's whole subtree goes unvisited.
    pub ignore_names: Vec<String>,
    /// Visit entries whose base name starts with `.` (default: skip them).
    pub include_dot_entries: bool,
    /// Deepest level to enumerate; the root sits at depth 0. Directories
    /// below the limit are reported as truncated leaves instead of entered.
    /// A negative limit truncates the root itself.
    pub max_depth: i32,
}
