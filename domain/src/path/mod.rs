//! Length-bounded output path synthesis.

pub mod limits;
pub mod synthesize;

pub use limits::{MAX_COMPONENT_BYTES, MAX_PATH_BYTES, PathLimits};
pub use synthesize::{PATH_SEPARATOR, synthesize_path};
