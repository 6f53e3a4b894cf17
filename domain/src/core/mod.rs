//! Core domain concepts shared across all subdomains.
//!
//! - [`error::PathError`] — failures surfaced by path synthesis
//! - [`string`] — whitespace trimming and NUL-padded field handling

pub mod error;
pub mod string;
