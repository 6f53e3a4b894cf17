//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`NamingConfig`] — sanitizing mode, trimming and path limits
//! - [`OutputLayout`] — the output directory tree prepared before dumping

pub mod naming_config;
pub mod output_layout;

pub use naming_config::NamingConfig;
pub use output_layout::OutputLayout;
