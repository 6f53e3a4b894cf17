//! String utilities for the domain layer.

/// Whitespace as classified by C `isspace` in the "C" locale.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Strip leading and trailing whitespace.
///
/// Only single-byte ASCII whitespace is considered, so interior bytes and
/// multi-byte sequences are never touched.
pub fn trim_whitespace(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_ascii() && is_c_space(c as u8))
}

/// In-place variant of [`trim_whitespace`] that reuses the allocation.
pub fn trim_in_place(s: &mut String) {
    let end = s.trim_end_matches(|c: char| c.is_ascii() && is_c_space(c as u8)).len();
    s.truncate(end);
    let start = s.len() - trim_whitespace(s).len();
    s.drain(..start);
}

/// Byte-slice variant of [`trim_whitespace`] for names that have not been
/// validated as UTF-8 yet.
pub fn trim_bytes(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&b| !is_c_space(b)).unwrap_or(s.len());
    let end = s.iter().rposition(|&b| !is_c_space(b)).map_or(start, |i| i + 1);
    &s[start..end]
}

/// Cut a fixed-size, NUL-padded field at its first NUL.
pub fn until_nul(s: &[u8]) -> &[u8] {
    match s.iter().position(|&b| b == 0) {
        Some(nul) => &s[..nul],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_mixed_whitespace() {
        assert_eq!(trim_whitespace("  hi\tthere  \n"), "hi\tthere");
        assert_eq!(trim_whitespace("\r\n\x0B\x0Cname\x0C"), "name");
    }

    #[test]
    fn test_trim_noop_and_empty() {
        assert_eq!(trim_whitespace("name"), "name");
        assert_eq!(trim_whitespace(""), "");
        assert_eq!(trim_whitespace(" \t\n "), "");
    }

    #[test]
    fn test_trim_keeps_multibyte_and_unicode_spaces() {
        assert_eq!(trim_whitespace("  ゼルダ 伝説 "), "ゼルダ 伝説");
        // U+3000 IDEOGRAPHIC SPACE is not C whitespace.
        assert_eq!(trim_whitespace("\u{3000}x\u{3000}"), "\u{3000}x\u{3000}");
    }

    #[test]
    fn test_trim_in_place() {
        let mut s = String::from("  hi\tthere  \n");
        trim_in_place(&mut s);
        assert_eq!(s, "hi\tthere");

        let mut s = String::from("   ");
        trim_in_place(&mut s);
        assert_eq!(s, "");

        let mut s = String::from(" é ");
        trim_in_place(&mut s);
        assert_eq!(s, "é");
    }

    #[test]
    fn test_trim_bytes() {
        assert_eq!(trim_bytes(b"  ab\xFF  "), b"ab\xFF");
        assert_eq!(trim_bytes(b"   "), b"");
        assert_eq!(trim_bytes(b""), b"");
    }

    #[test]
    fn test_until_nul() {
        assert_eq!(until_nul(b"Title\0\0\0\0"), b"Title");
        assert_eq!(until_nul(b"Title"), b"Title");
        assert_eq!(until_nul(b"\0Title"), b"");
    }
}
