//! Domain layer for dumppath
//!
//! This crate contains the pure core that turns untrusted names into
//! filesystem-legal, length-bounded, UTF-8 safe paths. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Names
//!
//! Titles and metadata names arrive as raw bytes from device metadata.
//! [`sanitize_filename`] decodes them one codepoint at a time and replaces
//! anything a target filesystem would reject, stopping at the first
//! malformed sequence.
//!
//! ## Paths
//!
//! [`synthesize_path`] joins a prefix, a name and an extension, limits every
//! component to [`PathLimits::max_component_bytes`] on codepoint boundaries
//! (keeping the extension), and rejects results that are not below
//! [`PathLimits::max_path_bytes`].

pub mod config;
pub mod core;
pub mod naming;
pub mod path;
pub mod text;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity, has_errors};
pub use self::core::{
    error::PathError,
    string::{trim_bytes, trim_in_place, trim_whitespace, until_nul},
};
pub use naming::{ILLEGAL_FILESYSTEM_CHARS, sanitize_filename};
pub use path::{
    MAX_COMPONENT_BYTES, MAX_PATH_BYTES, PATH_SEPARATOR, PathLimits, synthesize_path,
};
pub use text::{
    boundary::utf8_truncation_boundary,
    decoder::{Codepoint, DecodeError, DecodeErrorKind, decode_codepoint},
};
pub use util::hex_string;
