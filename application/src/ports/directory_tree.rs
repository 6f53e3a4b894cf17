//! Directory tree port
//!
//! Defines how synthesized paths are materialized on a filesystem.

use std::io;

/// Port for creating directory trees
///
/// This port defines how the application layer creates the directories a
/// dump will be written into. Implementations (adapters) live in the
/// infrastructure layer.
pub trait DirectoryTreePort: Send + Sync {
    /// Create every directory leading up to `path`.
    ///
    /// Each prefix of `path` that ends right before a `/` is created. When
    /// `create_last_element` is set, `path` itself is created as a directory
    /// too. Directories that already exist are not an error.
    fn create_tree(&self, path: &str, create_last_element: bool) -> io::Result<()>;
}

/// Prefixes of `path` that end right before each `/`, in creation order.
///
/// Empty prefixes (a leading `/` or `//`) are skipped.
pub fn parent_prefixes(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/')
        .map(move |(i, _)| &path[..i])
        .filter(|prefix| !prefix.is_empty() && !prefix.ends_with('/'))
}
