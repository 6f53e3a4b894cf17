//! Naming configuration from TOML (`[naming]` section)

use serde::{Deserialize, Serialize};

/// Raw naming configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNamingConfig {
    /// Restrict names to printable 7-bit ASCII
    pub ascii_only: bool,
    /// Strip surrounding whitespace from names
    pub trim: bool,
}

impl Default for FileNamingConfig {
    fn default() -> Self {
        Self {
            ascii_only: false,
            trim: true,
        }
    }
}
