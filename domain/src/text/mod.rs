//! Byte-level UTF-8 primitives.
//!
//! - [`decoder::decode_codepoint`] — decode one codepoint, failing on malformed input
//! - [`boundary::utf8_truncation_boundary`] — longest prefix that fits a byte budget

pub mod boundary;
pub mod decoder;
