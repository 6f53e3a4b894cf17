//! Path limit configuration from TOML (`[limits]` section)

use dumppath_domain::{MAX_COMPONENT_BYTES, MAX_PATH_BYTES, PathLimits};
use serde::{Deserialize, Serialize};

/// Raw limit configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLimitsConfig {
    /// Maximum bytes per path component
    pub max_component_bytes: usize,
    /// Synthesized paths must be shorter than this many bytes
    pub max_path_bytes: usize,
}

impl Default for FileLimitsConfig {
    fn default() -> Self {
        Self {
            max_component_bytes: MAX_COMPONENT_BYTES,
            max_path_bytes: MAX_PATH_BYTES,
        }
    }
}

impl FileLimitsConfig {
    pub fn to_path_limits(&self) -> PathLimits {
        PathLimits::new(self.max_component_bytes, self.max_path_bytes)
    }
}
