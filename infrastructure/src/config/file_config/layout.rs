//! Output layout configuration from TOML (`[layout]` section)

use dumppath_application::OutputLayout;
use serde::{Deserialize, Serialize};

/// Raw layout configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLayoutConfig {
    /// Root directory for all dumps
    pub root: String,
    /// Subdirectories created under the root
    pub directories: Vec<String>,
}

impl Default for FileLayoutConfig {
    fn default() -> Self {
        let layout = OutputLayout::default();
        Self {
            root: layout.root,
            directories: layout.directories,
        }
    }
}

impl FileLayoutConfig {
    pub fn to_output_layout(&self) -> OutputLayout {
        OutputLayout {
            root: self.root.clone(),
            directories: self.directories.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_override() {
        let toml_str = r#"
[layout]
root = "sd:/switch/dumps"
directories = ["NSP"]
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let layout = config.layout.to_output_layout();
        assert_eq!(layout.root, "sd:/switch/dumps");
        assert_eq!(layout.directories, vec!["NSP".to_string()]);
    }
}
