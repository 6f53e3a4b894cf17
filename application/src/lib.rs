//! Application layer for dumppath
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{NamingConfig, OutputLayout};
pub use ports::directory_tree::{DirectoryTreePort, parent_prefixes};
pub use use_cases::generate_output_path::{
    GenerateOutputPathError, GenerateOutputPathInput, GenerateOutputPathOutput,
    GenerateOutputPathUseCase,
};
pub use use_cases::prepare_output_dirs::{
    PrepareOutputDirectoriesError, PrepareOutputDirectoriesUseCase,
};
