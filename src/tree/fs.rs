use crate::error::{Result, VersionSyncError};
use crate::tree::Tree;
use std::fs;
use std::path::PathBuf;

/// Files on disk under a project root
#[derive(Debug, Clone)]
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsTree { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Tree for FsTree {
    fn read(&self, path: &str) -> Result<String> {
        fs::read_to_string(self.resolve(path)).map_err(|e| VersionSyncError::io(path, e))
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        fs::write(self.resolve(path), contents).map_err(|e| VersionSyncError::io(path, e))
    }
}
