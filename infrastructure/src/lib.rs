//! Infrastructure layer for dumppath
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod fs;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLayoutConfig, FileLimitsConfig, FileNamingConfig,
    FileOutputConfig,
};
pub use fs::LocalDirectoryTree;
