//! Limb - a depth-bounded, filtering directory tree walker

pub mod walk;

pub use walk::{BranchFailure, Leaf, WalkReport, Walker, WalkerConfig};
