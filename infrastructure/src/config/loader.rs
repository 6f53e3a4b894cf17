//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

const PROJECT_CONFIG_FILES: [&str; 2] = ["dumppath.toml", ".dumppath.toml"];

/// Prefix for environment overrides, e.g. `DUMPPATH_LIMITS__MAX_PATH_BYTES`.
const ENV_PREFIX: &str = "DUMPPATH_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. `DUMPPATH_*` environment variables (`__` separates sections)
    /// 3. Project root: `./dumppath.toml` or `./.dumppath.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/dumppath/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("Merging global config {}", global_path.display());
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config file (first name found wins)
        if let Some(path) = Self::project_config_path() {
            debug!("Merging project config {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            debug!("Merging explicit config {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/dumppath/config.toml if set,
    /// otherwise falls back to the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("dumppath").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Explicit: --config <path>");
        println!("  [     ] Env:      {ENV_PREFIX}<SECTION>__<KEY>");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project:  {}", path.display());
        } else {
            println!("  [     ] Project:  ./dumppath.toml or ./.dumppath.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:   {}", path.display());
            } else {
                println!("  [     ] Global:   {}", path.display());
            }
        }

        println!("  [     ] Default:  built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.limits.max_component_bytes, 255);
        assert_eq!(config.limits.max_path_bytes, 769);
        assert!(!config.naming.ascii_only);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("dumppath"));
    }

    #[test]
    fn test_explicit_file_merges_over_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dumppath.toml");
        fs::write(
            &path,
            r#"
[limits]
max_path_bytes = 4096

[naming]
ascii_only = true
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.limits.max_path_bytes, 4096);
        assert_eq!(config.limits.max_component_bytes, 255);
        assert!(config.naming.ascii_only);
        assert!(config.naming.trim);
        assert_eq!(config.layout.root, "dumps");
    }

    #[test]
    fn test_explicit_file_rejects_wrong_types() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[limits]\nmax_path_bytes = \"long\"\n").unwrap();

        assert!(ConfigLoader::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_with_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("explicit.toml");
        fs::write(&path, "[output]\nformat = \"json\"\n").unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(
            config.output.format,
            Some(dumppath_domain::OutputFormat::Json)
        );
    }
}
