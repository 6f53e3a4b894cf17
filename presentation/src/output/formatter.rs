//! Output formatter trait

use super::report::Report;

/// Trait for formatting command reports
pub trait OutputFormatter {
    /// Format a report for humans
    fn format(&self, report: &Report) -> String;

    /// Format as JSON
    fn format_json(&self, report: &Report) -> String;
}
