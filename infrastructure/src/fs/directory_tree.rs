//! Local file system directory tree creation
//!
//! This module provides the [`LocalDirectoryTree`] implementation of
//! [`DirectoryTreePort`] that creates directories with `std::fs`.

use dumppath_application::{DirectoryTreePort, parent_prefixes};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Directory tree creator backed by the local file system.
///
/// Paths are resolved relative to an optional base directory, otherwise
/// relative to the process working directory.
///
/// # Examples
///
/// ```
/// use dumppath_infrastructure::LocalDirectoryTree;
///
/// let tree = LocalDirectoryTree::new();
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalDirectoryTree {
    base: Option<PathBuf>,
}

impl LocalDirectoryTree {
    /// Creates a tree creator rooted at the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree creator that resolves relative paths under `base`.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(path),
            None => PathBuf::from(path),
        }
    }

    fn create_one(&self, path: &str) -> io::Result<()> {
        let resolved = self.resolve(path);
        match fs::create_dir(&resolved) {
            Ok(()) => {
                trace!("Created {}", resolved.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && resolved.is_dir() => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl DirectoryTreePort for LocalDirectoryTree {
    fn create_tree(&self, path: &str, create_last_element: bool) -> io::Result<()> {
        debug!("Creating directory tree for {}", path);
        for prefix in parent_prefixes(path) {
            self.create_one(prefix)?;
        }
        if create_last_element && !path.is_empty() {
            self.create_one(path)?;
        }
        Ok(())
    }
}
