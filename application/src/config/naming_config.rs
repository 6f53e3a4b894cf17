//! Naming parameters: how raw names become path components.

use dumppath_domain::PathLimits;
use serde::{Deserialize, Serialize};

/// Controls the name pipeline in
/// [`GenerateOutputPathUseCase`](crate::use_cases::generate_output_path::GenerateOutputPathUseCase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Replace everything outside printable 7-bit ASCII.
    pub ascii_only: bool,
    /// Strip surrounding whitespace before sanitizing.
    pub trim: bool,
    /// Byte limits for synthesized paths.
    pub limits: PathLimits,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            ascii_only: false,
            trim: true,
            limits: PathLimits::default(),
        }
    }
}

impl NamingConfig {
    // ==================== Builder Methods ====================

    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn with_limits(mut self, limits: PathLimits) -> Self {
        self.limits = limits;
        self
    }
}
