//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_output_path;
pub mod prepare_output_dirs;
