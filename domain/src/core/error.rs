//! Domain error types

use crate::text::decoder::DecodeError;
use thiserror::Error;

/// Errors produced while synthesizing an output path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("File extension length is >= truncated filename length ({extension_len} >= {boundary})")]
    ExtensionTooLong { extension_len: usize, boundary: usize },

    #[error("Generated path length is >= the path limit ({len} >= {max})")]
    PathTooLong { len: usize, max: usize },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl PathError {
    /// Whether the inputs were well formed but could not be made to fit.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            PathError::ExtensionTooLong { .. } | PathError::PathTooLong { .. }
        )
    }
}
