//! Configuration file loading for dumppath
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. `DUMPPATH_*` environment variables
//! 3. Project root: `./dumppath.toml` or `./.dumppath.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dumppath/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLayoutConfig, FileLimitsConfig, FileNamingConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
