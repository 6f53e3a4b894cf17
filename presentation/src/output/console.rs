//! Console output formatter for command reports

use super::formatter::OutputFormatter;
use super::report::Report;
use colored::Colorize;

/// Formats command reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a report for humans
    pub fn format(report: &Report) -> String {
        match report {
            Report::Path {
                input,
                sanitized_name,
                path,
                bytes,
                truncated,
            } => {
                let mut output = String::new();
                output.push_str(&Self::field("Input:", input));
                output.push_str(&Self::field("Sanitized:", sanitized_name));
                output.push_str(&format!("{} {}\n", "Path:".cyan().bold(), path.green()));
                let length = format!("{bytes} bytes");
                if *truncated {
                    output.push_str(&format!(
                        "{} {} {}\n",
                        "Length:".cyan().bold(),
                        length,
                        "(truncated)".yellow()
                    ));
                } else {
                    output.push_str(&Self::field("Length:", &length));
                }
                output
            }
            Report::Sanitize {
                input,
                input_hex,
                output: sanitized,
            } => {
                let mut output = String::new();
                output.push_str(&Self::field("Input:", input));
                output.push_str(&Self::field("Bytes:", input_hex));
                output.push_str(&format!(
                    "{} {}\n",
                    "Output:".cyan().bold(),
                    sanitized.green()
                ));
                output
            }
            Report::Boundary {
                input,
                budget,
                boundary,
                prefix,
            } => {
                let mut output = String::new();
                output.push_str(&Self::field("Input:", input));
                output.push_str(&Self::field(
                    "Budget:",
                    &format!("{budget} of {} bytes", input.len()),
                ));
                output.push_str(&Self::field("Boundary:", &boundary.to_string()));
                output.push_str(&format!("{} {}\n", "Prefix:".cyan().bold(), prefix.green()));
                output
            }
            Report::Trim { output: trimmed, .. } => format!("{trimmed}\n"),
            Report::InitDirs { created } => {
                let mut output = format!(
                    "{}\n",
                    format!("Prepared {} directories", created.len()).cyan().bold()
                );
                output.push_str(&Self::indent(&created.join("\n"), "  "));
                output.push('\n');
                output
            }
        }
    }

    /// Format as JSON
    pub fn format_json(report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn field(label: &str, value: &str) -> String {
        format!("{} {}\n", label.cyan().bold(), value)
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{prefix}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, report: &Report) -> String {
        Self::format(report)
    }

    fn format_json(&self, report: &Report) -> String {
        Self::format_json(report)
    }
}
