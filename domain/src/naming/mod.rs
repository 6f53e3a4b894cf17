//! Turning untrusted titles and metadata names into legal file names.

pub mod sanitize;

pub use sanitize::{ILLEGAL_FILESYSTEM_CHARS, sanitize_filename};
