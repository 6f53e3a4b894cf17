//! Illegal character replacement for untrusted names.

use crate::core::string::until_nul;
use crate::text::decoder::decode_codepoint;

/// Characters no supported target filesystem accepts in a name.
pub const ILLEGAL_FILESYSTEM_CHARS: &[u8] = b"\\/:*?\"<>|";

/// Placeholder written in place of every rejected codepoint.
pub const REPLACEMENT: u8 = b'_';

fn is_illegal(value: u32, ascii_only: bool) -> bool {
    let reserved = u8::try_from(value).is_ok_and(|b| ILLEGAL_FILESYSTEM_CHARS.contains(&b));
    reserved
        || value < 0x20
        || (!ascii_only && value == 0x7F)
        || (ascii_only && value >= 0x7F)
}

/// Replace filesystem-illegal codepoints in `name` with `_`.
///
/// Each rejected codepoint becomes exactly one byte regardless of its encoded
/// length, so the result is never longer than the input. Decoding stops at
/// the first malformed sequence and the result ends there. With `ascii_only`
/// everything outside printable 7-bit ASCII is replaced as well.
pub fn sanitize_filename(name: &[u8], ascii_only: bool) -> String {
    let name = until_nul(name);
    let mut out = String::with_capacity(name.len());
    let mut pos = 0;

    while pos < name.len() {
        let Ok(cp) = decode_codepoint(name, pos) else {
            break;
        };
        if is_illegal(cp.value, ascii_only) {
            out.push(char::from(REPLACEMENT));
        } else if let Some(c) = char::from_u32(cp.value) {
            out.push(c);
        } else {
            break;
        }
        pos += cp.len;
    }

    out
}
