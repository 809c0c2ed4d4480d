//! Working-tree abstraction layer
//!
//! Rules address their targets by path relative to a project root. This
//! module provides the [Tree] trait that the rewriter reads and writes
//! through, so the same propagation logic can run against:
//!
//! - [fs::FsTree]: the real files under a root directory
//! - [dry_run::DryRunTree]: an overlay that stages writes in memory
//! - [mock::MemoryTree]: an in-memory tree for testing
//!
//! # Usage
//!
//! ```rust
//! # use version_sync::tree::{MemoryTree, Tree};
//! let tree = MemoryTree::new().with_file("Cargo.toml", "version = \"1.0.0\"\n");
//! let text = tree.read("Cargo.toml").unwrap();
//! tree.write("Cargo.toml", &text.replace("1.0.0", "1.1.0")).unwrap();
//! assert_eq!(tree.writes(), vec!["Cargo.toml".to_string()]);
//! ```

pub mod dry_run;
pub mod fs;
pub mod mock;

pub use dry_run::DryRunTree;
pub use fs::FsTree;
pub use mock::MemoryTree;

use crate::error::Result;

/// Text access to the files rules point at
///
/// Reads are never cached by callers: a file visited by several rules is
/// read again for each one, so edits accumulate in declaration order.
///
/// ## Error Handling
///
/// A missing file must surface as [crate::error::VersionSyncError::FileNotFound];
/// other failures as [crate::error::VersionSyncError::Io].
pub trait Tree: Send + Sync {
    /// Read the full text of `path`
    fn read(&self, path: &str) -> Result<String>;

    /// Replace the full text of `path`
    fn write(&self, path: &str, contents: &str) -> Result<()>;
}

impl<T: Tree + ?Sized> Tree for &T {
    fn read(&self, path: &str) -> Result<String> {
        (**self).read(path)
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        (**self).write(path, contents)
    }
}
