//! Codepoint-safe truncation offsets.

use super::decoder::decode_codepoint;

/// Largest prefix length of `s` that fits `byte_budget` without splitting a
/// codepoint.
///
/// Returns `s.len()` when the whole string already fits. Otherwise the scan
/// only records an offset while the codepoint ending there stays strictly
/// below the budget, so a codepoint ending exactly on the budget is left out.
/// Scanning stops at malformed input or a NUL codepoint; whatever was recorded
/// before that point is returned.
pub fn utf8_truncation_boundary(s: &[u8], byte_budget: usize) -> usize {
    if s.is_empty() || byte_budget == 0 {
        return 0;
    }
    if byte_budget >= s.len() {
        return s.len();
    }

    let mut pos = 0;
    let mut last = 0;
    while pos < byte_budget {
        let cp = match decode_codepoint(s, pos) {
            Ok(cp) if cp.value != 0 => cp,
            _ => break,
        };
        pos += cp.len;
        if pos < byte_budget {
            last = pos;
        }
    }
    last
}

/// Largest codepoint boundary of well-formed `s` that is `<= index`.
///
/// Walks back over continuation bytes; `s` must already be valid UTF-8.
pub(crate) fn floor_boundary(s: &[u8], index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut end = index;
    while end > 0 && s[end] & 0xC0 == 0x80 {
        end -= 1;
    }
    end
}
