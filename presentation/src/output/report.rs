//! Command results in a shape both formatters can render.

use dumppath_application::GenerateOutputPathOutput;
use serde::Serialize;

/// Result of a single CLI command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Path {
        input: String,
        sanitized_name: String,
        path: String,
        bytes: usize,
        truncated: bool,
    },
    Sanitize {
        input: String,
        input_hex: String,
        output: String,
    },
    Boundary {
        input: String,
        budget: usize,
        boundary: usize,
        prefix: String,
    },
    Trim {
        input: String,
        output: String,
    },
    InitDirs {
        created: Vec<String>,
    },
}

impl Report {
    pub fn from_path_output(input: &str, output: GenerateOutputPathOutput) -> Self {
        Report::Path {
            input: input.to_string(),
            bytes: output.path.len(),
            sanitized_name: output.sanitized_name,
            path: output.path,
            truncated: output.truncated,
        }
    }

    /// The bare result, without labels.
    pub fn primary_value(&self) -> String {
        match self {
            Report::Path { path, .. } => path.clone(),
            Report::Sanitize { output, .. } | Report::Trim { output, .. } => output.clone(),
            Report::Boundary { prefix, .. } => prefix.clone(),
            Report::InitDirs { created } => created.join("\n"),
        }
    }
}
