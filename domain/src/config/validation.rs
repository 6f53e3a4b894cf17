//! Structured configuration issues.
//!
//! Validation never fails outright; it returns every detected issue so the
//! caller can decide which severities are fatal.
//!
//! # Examples
//!
//! ```
//! use dumppath_domain::PathLimits;
//!
//! let issues = PathLimits::default().validate();
//! assert!(issues.is_empty());
//! ```

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A byte limit was set to zero.
    ZeroLimit { field: String },
    /// The per-component limit is not below the total path limit.
    ComponentLimitNotBelowPathLimit,
    /// A required string value is empty.
    EmptyValue { field: String },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Whether any issue in `issues` is fatal.
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(ConfigIssue::is_error)
}
