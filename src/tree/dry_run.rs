use crate::error::Result;
use crate::tree::Tree;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Overlay that stages writes in memory instead of passing them through.
///
/// Reads see staged contents first, so a file visited by several rules
/// accumulates edits exactly as it would on disk.
#[derive(Debug)]
pub struct DryRunTree<T> {
    inner: T,
    staged: Mutex<BTreeMap<String, String>>,
}

impl<T: Tree> DryRunTree<T> {
    pub fn new(inner: T) -> Self {
        DryRunTree {
            inner,
            staged: Mutex::new(BTreeMap::new()),
        }
    }

    /// Paths that would have been written, sorted
    pub fn staged_paths(&self) -> Vec<String> {
        self.staged
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .keys()
            .cloned()
            .collect()
    }
}

impl<T: Tree> Tree for DryRunTree<T> {
    fn read(&self, path: &str) -> Result<String> {
        let staged = self
            .staged
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(path)
            .cloned();
        match staged {
            Some(contents) => Ok(contents),
            None => self.inner.read(path),
        }
    }

    fn write(&self, path: &str, contents: &str) -> Result<()> {
        self.staged
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(path.to_string(), contents.to_string());
        Ok(())
    }
}
