//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod layout;
mod limits;
mod naming;
mod output;

pub use layout::FileLayoutConfig;
pub use limits::FileLimitsConfig;
pub use naming::FileNamingConfig;
pub use output::FileOutputConfig;

use dumppath_application::NamingConfig;
use dumppath_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Byte limits for synthesized paths
    pub limits: FileLimitsConfig,
    /// Name sanitizing settings
    pub naming: FileNamingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Output directory layout
    pub layout: FileLayoutConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Path limits (zero values, component limit vs path limit)
    /// 2. An empty layout root
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.limits.to_path_limits().validate();

        if self.layout.root.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EmptyValue {
                    field: "layout.root".to_string(),
                },
                message: "layout.root is empty; output directories cannot be prepared"
                    .to_string(),
            });
        }

        issues
    }

    /// Application-level naming parameters.
    pub fn to_naming_config(&self) -> NamingConfig {
        NamingConfig::default()
            .with_ascii_only(self.naming.ascii_only)
            .with_trim(self.naming.trim)
            .with_limits(self.limits.to_path_limits())
    }
}
