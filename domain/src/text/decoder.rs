//! Single-codepoint UTF-8 decoding.
//!
//! Names handed to this crate come from device metadata and are not trusted
//! to be well formed, so every consumer walks them one codepoint at a time
//! through [`decode_codepoint`] and stops at the first failure.

use thiserror::Error;

/// A decoded Unicode scalar value together with the number of source bytes
/// it occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codepoint {
    /// Scalar value.
    pub value: u32,
    /// Encoded length in bytes (1..=4).
    pub len: usize,
}

/// Why a byte sequence failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The position is at or past the end of the buffer.
    OutOfBounds,
    /// A byte that can never start a sequence (continuation byte, 0xC0, 0xC1, 0xF5..).
    InvalidLeadByte,
    /// A byte inside the sequence is not `10xxxxxx`.
    InvalidContinuation,
    /// The buffer ends before the sequence is complete.
    Truncated,
    /// The value could have been encoded with fewer bytes.
    Overlong,
    /// UTF-16 surrogate or value above U+10FFFF.
    InvalidScalar,
}

/// Malformed UTF-8 at a given byte offset.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("malformed UTF-8 at byte offset {offset} ({kind:?})")]
pub struct DecodeError {
    pub offset: usize,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    fn at(offset: usize, kind: DecodeErrorKind) -> Self {
        Self { offset, kind }
    }
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(err: std::str::Utf8Error) -> Self {
        let kind = match err.error_len() {
            None => DecodeErrorKind::Truncated,
            Some(1) => DecodeErrorKind::InvalidLeadByte,
            Some(_) => DecodeErrorKind::InvalidContinuation,
        };
        Self::at(err.valid_up_to(), kind)
    }
}

/// Decode the codepoint starting at `bytes[pos]`.
///
/// Never reads at or past `bytes.len()`.
pub fn decode_codepoint(bytes: &[u8], pos: usize) -> Result<Codepoint, DecodeError> {
    let lead = *bytes
        .get(pos)
        .ok_or(DecodeError::at(pos, DecodeErrorKind::OutOfBounds))?;

    let (len, initial, min) = match lead {
        0x00..=0x7F => {
            return Ok(Codepoint {
                value: u32::from(lead),
                len: 1,
            });
        }
        0xC2..=0xDF => (2, u32::from(lead & 0x1F), 0x80),
        0xE0..=0xEF => (3, u32::from(lead & 0x0F), 0x800),
        0xF0..=0xF4 => (4, u32::from(lead & 0x07), 0x1_0000),
        _ => return Err(DecodeError::at(pos, DecodeErrorKind::InvalidLeadByte)),
    };

    if bytes.len() - pos < len {
        return Err(DecodeError::at(pos, DecodeErrorKind::Truncated));
    }

    let mut value = initial;
    for &byte in &bytes[pos + 1..pos + len] {
        if byte & 0xC0 != 0x80 {
            return Err(DecodeError::at(pos, DecodeErrorKind::InvalidContinuation));
        }
        value = (value << 6) | u32::from(byte & 0x3F);
    }

    if value < min {
        return Err(DecodeError::at(pos, DecodeErrorKind::Overlong));
    }
    if (0xD800..=0xDFFF).contains(&value) || value > 0x10_FFFF {
        return Err(DecodeError::at(pos, DecodeErrorKind::InvalidScalar));
    }

    Ok(Codepoint { value, len })
}

/// Check that the whole buffer decodes, reporting the first failure.
pub fn validate(bytes: &[u8]) -> Result<(), DecodeError> {
    validate_at(bytes, 0)
}

/// [`validate`] for a slice that sits at `base` inside a larger buffer;
/// reported offsets are relative to that buffer.
pub fn validate_at(bytes: &[u8], base: usize) -> Result<(), DecodeError> {
    let mut pos = 0;
    while pos < bytes.len() {
        match decode_codepoint(bytes, pos) {
            Ok(cp) => pos += cp.len,
            Err(err) => return Err(DecodeError::at(base + err.offset, err.kind)),
        }
    }
    Ok(())
}
