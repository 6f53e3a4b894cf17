//! Byte limits applied to synthesized paths.

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Per-name byte cap shared by NTFS, exFAT and most Unix filesystems.
pub const MAX_COMPONENT_BYTES: usize = 255;

/// Horizon OS `FS_MAX_PATH`, the default total path limit.
pub const MAX_PATH_BYTES: usize = 0x301;

/// Byte limits passed explicitly into path synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathLimits {
    /// Maximum bytes in a single path component.
    pub max_component_bytes: usize,
    /// Synthesized paths must be strictly shorter than this.
    pub max_path_bytes: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_component_bytes: MAX_COMPONENT_BYTES,
            max_path_bytes: MAX_PATH_BYTES,
        }
    }
}

impl PathLimits {
    pub fn new(max_component_bytes: usize, max_path_bytes: usize) -> Self {
        Self {
            max_component_bytes,
            max_path_bytes,
        }
    }

    /// Check the limits for combinations that cannot produce useful paths.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("limits.max_component_bytes", self.max_component_bytes),
            ("limits.max_path_bytes", self.max_path_bytes),
        ] {
            if value == 0 {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::ZeroLimit {
                        field: field.to_string(),
                    },
                    message: format!("{field} must be greater than zero"),
                });
            }
        }

        if self.max_path_bytes != 0 && self.max_component_bytes >= self.max_path_bytes {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::ComponentLimitNotBelowPathLimit,
                message: format!(
                    "limits.max_component_bytes ({}) is not below limits.max_path_bytes ({}); \
                     the path limit will always apply first",
                    self.max_component_bytes, self.max_path_bytes
                ),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let limits = PathLimits::default();
        assert_eq!(limits.max_component_bytes, 255);
        assert_eq!(limits.max_path_bytes, 769);
        assert!(limits.validate().is_empty());
    }

    #[test]
    fn test_zero_limits_are_errors() {
        let issues = PathLimits::new(0, 0).validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(ConfigIssue::is_error));
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ZeroLimit {
                field: "limits.max_component_bytes".to_string()
            }
        );
    }

    #[test]
    fn test_component_limit_above_path_limit_is_warning() {
        let issues = PathLimits::new(MAX_COMPONENT_BYTES, 100).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::ComponentLimitNotBelowPathLimit
        );
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let limits: PathLimits = serde_json::from_str(r#"{"max_path_bytes": 4096}"#).unwrap();
        assert_eq!(limits.max_component_bytes, MAX_COMPONENT_BYTES);
        assert_eq!(limits.max_path_bytes, 4096);
    }
}
