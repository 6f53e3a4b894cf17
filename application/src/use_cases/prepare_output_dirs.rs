//! Prepare output directories use case
//!
//! Creates the output layout root and each content subdirectory, and the
//! parent directories of individual synthesized paths. Subdirectory names
//! are trimmed and sanitized like dump file names. The root is a location
//! (it may carry a device prefix and separators), so it is used as given,
//! but it is still held to the path limits.

use crate::config::{NamingConfig, OutputLayout};
use crate::ports::directory_tree::DirectoryTreePort;
use dumppath_domain::{PathError, sanitize_filename, synthesize_path, trim_bytes};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while preparing output directories
#[derive(Error, Debug)]
pub enum PrepareOutputDirectoriesError {
    #[error("Output directory name {0:?} is empty after sanitizing")]
    EmptyDirectoryName(String),

    #[error("Invalid output directory path: {0}")]
    Path(#[from] PathError),

    #[error("Failed to create directory {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Use case for materializing output directories
pub struct PrepareOutputDirectoriesUseCase<D: DirectoryTreePort + 'static> {
    tree: Arc<D>,
    config: NamingConfig,
}

impl<D: DirectoryTreePort + 'static> PrepareOutputDirectoriesUseCase<D> {
    pub fn new(tree: Arc<D>, config: NamingConfig) -> Self {
        Self { tree, config }
    }

    /// Create the layout root and every configured subdirectory.
    ///
    /// Returns the created directory paths, root first.
    pub fn execute(
        &self,
        layout: &OutputLayout,
    ) -> Result<Vec<String>, PrepareOutputDirectoriesError> {
        let root = synthesize_path(None, layout.root.as_bytes(), None, &self.config.limits)?;
        self.create(&root, true)?;

        let mut created = vec![root];
        for name in &layout.directories {
            let mut raw = name.as_bytes();
            if self.config.trim {
                raw = trim_bytes(raw);
            }
            let sanitized = sanitize_filename(raw, self.config.ascii_only);
            if sanitized.is_empty() {
                return Err(PrepareOutputDirectoriesError::EmptyDirectoryName(
                    name.clone(),
                ));
            }
            let path = synthesize_path(
                Some(created[0].as_bytes()),
                sanitized.as_bytes(),
                None,
                &self.config.limits,
            )?;
            self.create(&path, true)?;
            created.push(path);
        }

        info!("Prepared {} output directories under {}", created.len(), created[0]);
        Ok(created)
    }

    /// Create the parent directories of a synthesized file path.
    pub fn ensure_parents(&self, path: &str) -> Result<(), PrepareOutputDirectoriesError> {
        self.create(path, false)
    }

    fn create(
        &self,
        path: &str,
        create_last_element: bool,
    ) -> Result<(), PrepareOutputDirectoriesError> {
        debug!(
            "Creating directory tree for {} (last element: {})",
            path, create_last_element
        );
        self.tree
            .create_tree(path, create_last_element)
            .map_err(|source| PrepareOutputDirectoriesError::Create {
                path: path.to_string(),
                source,
            })
    }
}
