//! Generate output path use case
//!
//! Turns a raw title or metadata name into the path a dump is written to:
//!
//! 1. **Cut** the name at its first NUL (fixed-size metadata fields)
//! 2. **Trim** surrounding whitespace (when enabled)
//! 3. **Sanitize** illegal characters, failing closed on malformed UTF-8
//! 4. **Synthesize** the full path under the configured limits

use crate::config::NamingConfig;
use dumppath_domain::{PathError, sanitize_filename, synthesize_path, trim_bytes, until_nul};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while generating an output path
#[derive(Error, Debug)]
pub enum GenerateOutputPathError {
    /// Nothing usable was left of the name.
    #[error("Name is empty after trimming and sanitizing")]
    EmptyName,

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Input for the GenerateOutputPath use case
#[derive(Debug, Clone)]
pub struct GenerateOutputPathInput {
    /// Raw name bytes as read from metadata.
    pub name: Vec<u8>,
    /// Output directory the name is placed in.
    pub prefix: Option<String>,
    /// Extension appended verbatim, including its leading dot.
    pub extension: Option<String>,
}

impl GenerateOutputPathInput {
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            prefix: None,
            extension: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }
}

/// Result of the GenerateOutputPath use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateOutputPathOutput {
    /// The name after trimming and sanitizing.
    pub sanitized_name: String,
    /// The synthesized path.
    pub path: String,
    /// Whether any component had to be shortened to fit.
    pub truncated: bool,
}

/// Use case for generating output paths from untrusted names
#[derive(Debug, Clone, Default)]
pub struct GenerateOutputPathUseCase {
    config: NamingConfig,
}

impl GenerateOutputPathUseCase {
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    /// Execute the use case
    pub fn execute(
        &self,
        input: &GenerateOutputPathInput,
    ) -> Result<GenerateOutputPathOutput, GenerateOutputPathError> {
        let mut name = until_nul(&input.name);
        if self.config.trim {
            name = trim_bytes(name);
        }

        let sanitized_name = sanitize_filename(name, self.config.ascii_only);
        if sanitized_name.is_empty() {
            warn!("Name {:?} sanitized to nothing", String::from_utf8_lossy(name));
            return Err(GenerateOutputPathError::EmptyName);
        }
        if sanitized_name.as_bytes() != name {
            debug!("Sanitized name {:?} -> {:?}", String::from_utf8_lossy(name), sanitized_name);
        }

        let prefix = input.prefix.as_deref().filter(|p| !p.is_empty());
        let extension = input.extension.as_deref().filter(|e| !e.is_empty());

        let path = synthesize_path(
            prefix.map(str::as_bytes),
            sanitized_name.as_bytes(),
            extension.map(str::as_bytes),
            &self.config.limits,
        )
        .inspect_err(|e| warn!("Failed to generate path for {:?}: {}", sanitized_name, e))?;

        let untruncated_len = prefix.map_or(0, |p| p.len() + usize::from(!p.ends_with('/')))
            + sanitized_name.len()
            + extension.map_or(0, str::len);
        let truncated = path.len() < untruncated_len;
        if truncated {
            warn!(
                "Path for {:?} truncated from {} to {} bytes",
                sanitized_name,
                untruncated_len,
                path.len()
            );
        }

        debug!("Generated output path {:?}", path);

        Ok(GenerateOutputPathOutput {
            sanitized_name,
            path,
            truncated,
        })
    }
}
