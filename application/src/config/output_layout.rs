//! Output directory layout.

use serde::{Deserialize, Serialize};

/// Root directory and the per-content subdirectories created under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLayout {
    pub root: String,
    pub directories: Vec<String>,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            root: "dumps".to_string(),
            directories: [
                "gamecard",
                "certificate",
                "HFS",
                "NSP",
                "Ticket",
                "NCA",
                "NCA FS",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl OutputLayout {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
        }
    }

    pub fn with_directory(mut self, name: impl Into<String>) -> Self {
        self.directories.push(name.into());
        self
    }
}
