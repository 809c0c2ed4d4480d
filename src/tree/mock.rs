use crate::error::{Result, VersionSyncError};
use crate::tree::Tree;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory tree for testing without touching the filesystem
///
/// Every successful `write` is recorded so tests can assert how many writes
/// an operation performed.
#[derive(Debug, Default)]
pub struct MemoryTree {
    files: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<String>>,
}

impl MemoryTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the tree
    pub fn with_file(self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file without recording a write
    pub fn insert(&self, path: impl Into<String>, contents: impl Into<String>) {
        lock(&self.files).insert(path.into(), contents.into());
    }

    /// Current contents of `path`, if present
    pub fn contents(&self, path: &str) -> Option<String> {
        lock(&self.files).get(path).cloned()
    }

    /// Paths written so far, in write order
    pub fn writes(&self) -> Vec<String> {
        lock(&self.writes).clone()
    }

    pub fn clear_writes(&self) {
        lock(&self.writes).clear();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Tree for MemoryTree {
    fn read(&self, path: &str) -> Result<String> {
        lock(&self.files)
            .get(path)
            .cloned()
            .ok_or_else(|| VersionSyncError::FileNotFound(path.into()))
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        lock(&self.files).insert(path.to_string(), contents.to_string());
        lock(&self.writes).push(path.to_string());
        Ok(())
    }
}
