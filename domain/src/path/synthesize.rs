//! Output path synthesis.
//!
//! A path is assembled from an optional prefix, a file name and an optional
//! extension, then every component is cut down to the per-component byte
//! limit. Cutting a component in the middle of the path shifts the rest of
//! the buffer left; cutting the last one keeps the extension as its suffix.
//! The final length is then checked against the total path limit.

use super::limits::PathLimits;
use crate::core::error::PathError;
use crate::core::string::until_nul;
use crate::text::boundary::{floor_boundary, utf8_truncation_boundary};
use crate::text::decoder::{DecodeError, validate_at};

/// Separator between path components.
pub const PATH_SEPARATOR: u8 = b'/';

/// Build a length-bounded, UTF-8 safe output path.
///
/// Empty `prefix` and `extension` values are treated as absent. A separator
/// is inserted after the prefix unless it already ends with one. Each input
/// is read up to its first NUL.
///
/// # Errors
///
/// - [`PathError::InvalidArguments`] for an empty file name, an extension
///   containing a separator, or zero limits
/// - [`PathError::Decode`] if any input is not well-formed UTF-8
/// - [`PathError::ExtensionTooLong`] if the extension does not fit in the
///   truncated last component
/// - [`PathError::PathTooLong`] if the result is not below `max_path_bytes`
pub fn synthesize_path(
    prefix: Option<&[u8]>,
    filename: &[u8],
    extension: Option<&[u8]>,
    limits: &PathLimits,
) -> Result<String, PathError> {
    let filename = until_nul(filename);
    if filename.is_empty() {
        return Err(PathError::InvalidArguments("file name is empty".to_string()));
    }
    if limits.max_component_bytes == 0 || limits.max_path_bytes == 0 {
        return Err(PathError::InvalidArguments(
            "path limits must be greater than zero".to_string(),
        ));
    }

    let prefix = prefix.map(until_nul).filter(|p| !p.is_empty());
    let extension = extension.map(until_nul).filter(|e| !e.is_empty());
    if extension.is_some_and(|e| e.contains(&PATH_SEPARATOR)) {
        return Err(PathError::InvalidArguments(
            "file extension contains a path separator".to_string(),
        ));
    }

    let mut path = assemble(prefix, filename, extension)?;
    let extension_len = extension.map_or(0, <[u8]>::len);

    let mut start = 0;
    loop {
        let separator = path[start..]
            .iter()
            .position(|&b| b == PATH_SEPARATOR)
            .map(|i| start + i);
        let end = separator.unwrap_or(path.len());
        let boundary = utf8_truncation_boundary(&path[start..end], limits.max_component_bytes);

        if boundary < end - start {
            match separator {
                Some(sep) => {
                    path.drain(start + boundary..sep);
                }
                None if extension_len > 0 => {
                    if extension_len >= boundary {
                        return Err(PathError::ExtensionTooLong {
                            extension_len,
                            boundary,
                        });
                    }
                    let base_end = end - extension_len;
                    let cut = start
                        + floor_boundary(&path[start..base_end], boundary - extension_len);
                    path.drain(cut..base_end);
                }
                None => path.truncate(start + boundary),
            }
        }

        match separator {
            Some(_) => start += boundary + 1,
            None => break,
        }
    }

    if path.len() >= limits.max_path_bytes {
        return Err(PathError::PathTooLong {
            len: path.len(),
            max: limits.max_path_bytes,
        });
    }

    String::from_utf8(path).map_err(|err| PathError::Decode(DecodeError::from(err.utf8_error())))
}

/// Concatenate the inputs, validating each one on its own so that a split
/// sequence cannot be completed by its neighbour.
fn assemble(
    prefix: Option<&[u8]>,
    filename: &[u8],
    extension: Option<&[u8]>,
) -> Result<Vec<u8>, DecodeError> {
    let capacity = prefix.map_or(0, |p| p.len() + 1)
        + filename.len()
        + extension.map_or(0, <[u8]>::len);
    let mut path = Vec::with_capacity(capacity);

    if let Some(prefix) = prefix {
        validate_at(prefix, 0)?;
        path.extend_from_slice(prefix);
        if prefix.last() != Some(&PATH_SEPARATOR) {
            path.push(PATH_SEPARATOR);
        }
    }

    validate_at(filename, path.len())?;
    path.extend_from_slice(filename);

    if let Some(extension) = extension {
        validate_at(extension, path.len())?;
        path.extend_from_slice(extension);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::decoder::DecodeErrorKind;

    fn build(
        prefix: Option<&str>,
        filename: &str,
        extension: Option<&str>,
    ) -> Result<String, PathError> {
        synthesize_path(
            prefix.map(str::as_bytes),
            filename.as_bytes(),
            extension.map(str::as_bytes),
            &PathLimits::default(),
        )
    }

    fn assert_within_limits(path: &str, limits: &PathLimits) {
        assert!(path.len() < limits.max_path_bytes);
        for component in path.split('/') {
            assert!(
                component.len() <= limits.max_component_bytes,
                "component of {} bytes",
                component.len()
            );
        }
    }

    // ==================== Assembly ====================

    #[test]
    fn test_filename_only_is_unchanged() {
        assert_eq!(build(None, "valid", None).unwrap(), "valid");
    }

    #[test]
    fn test_separator_inserted_only_when_missing() {
        assert_eq!(build(Some("sd:/out"), "file", Some(".txt")).unwrap(), "sd:/out/file.txt");
        assert_eq!(build(Some("sd:/out/"), "file", Some(".txt")).unwrap(), "sd:/out/file.txt");
    }

    #[test]
    fn test_empty_prefix_and_extension_are_absent() {
        assert_eq!(build(Some(""), "file", Some("")).unwrap(), "file");
    }

    #[test]
    fn test_inputs_are_cut_at_nul() {
        let path = synthesize_path(
            Some(b"out\0junk".as_slice()),
            b"Title\0\0\0\0",
            Some(b".nsp\0".as_slice()),
            &PathLimits::default(),
        )
        .unwrap();
        assert_eq!(path, "out/Title.nsp");
    }

    // ==================== Argument errors ====================

    #[test]
    fn test_empty_filename_is_rejected() {
        assert!(matches!(build(Some("p"), "", None), Err(PathError::InvalidArguments(_))));
        let err = synthesize_path(None, b"\0name", None, &PathLimits::default()).unwrap_err();
        assert!(matches!(err, PathError::InvalidArguments(_)));
    }

    #[test]
    fn test_extension_with_separator_is_rejected() {
        assert!(matches!(
            build(None, "file", Some("/etc")),
            Err(PathError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        let err = synthesize_path(None, b"file", None, &PathLimits::new(0, 769)).unwrap_err();
        assert!(matches!(err, PathError::InvalidArguments(_)));
    }

    #[test]
    fn test_malformed_input_is_a_hard_error() {
        let err = synthesize_path(Some(b"p".as_slice()), b"ab\xFF", None, &PathLimits::default()).unwrap_err();
        match err {
            PathError::Decode(decode) => {
                assert_eq!(decode.offset, 4);
                assert_eq!(decode.kind, DecodeErrorKind::InvalidLeadByte);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_split_sequence_across_inputs_is_rejected() {
        // "é" is C3 A9; neither half is valid on its own.
        let err = synthesize_path(None, b"ab\xC3", Some(b"\xA9.txt".as_slice()), &PathLimits::default())
            .unwrap_err();
        assert!(matches!(err, PathError::Decode(_)));
    }

    // ==================== Last component ====================

    #[test]
    fn test_long_filename_keeps_extension() {
        let name = "x".repeat(300);
        let path = build(Some("sd:/out"), &name, Some(".txt")).unwrap();
        let last = path.rsplit('/').next().unwrap();

        assert!(path.starts_with("sd:/out/"));
        assert!(last.ends_with(".txt"));
        // The codepoint ending exactly on 255 is excluded, leaving 254 bytes.
        assert_eq!(last.len(), 254);
        assert_eq!(&last[..250], "x".repeat(250));
        assert_within_limits(&path, &PathLimits::default());
    }

    #[test]
    fn test_component_of_exactly_the_limit_is_kept() {
        let name = "x".repeat(251);
        let path = build(None, &name, Some(".txt")).unwrap();
        assert_eq!(path.len(), 255);
        assert_eq!(path, format!("{name}.txt"));
    }

    #[test]
    fn test_one_byte_over_the_limit_is_truncated() {
        let name = "x".repeat(252);
        let path = build(None, &name, Some(".txt")).unwrap();
        assert_eq!(path, format!("{}.txt", "x".repeat(250)));
    }

    #[test]
    fn test_long_filename_without_extension_is_cut() {
        let name = "y".repeat(400);
        let path = build(Some("out"), &name, None).unwrap();
        assert_eq!(path, format!("out/{}", "y".repeat(254)));
    }

    #[test]
    fn test_multibyte_base_is_cut_on_a_codepoint_boundary() {
        let name = "あ".repeat(100);
        let path = build(None, &name, Some(".txt")).unwrap();
        // Budget keeps 252 bytes; 248 base bytes back off to 82 whole codepoints.
        assert_eq!(path, format!("{}.txt", "あ".repeat(82)));
    }

    #[test]
    fn test_multibyte_without_extension_is_cut_on_a_codepoint_boundary() {
        let name = "👑".repeat(80);
        let path = build(None, &name, None).unwrap();
        assert_eq!(path, "👑".repeat(63));
    }

    #[test]
    fn test_extension_too_long() {
        let extension = ".extensionlongerthanbudget".repeat(20);
        let err = build(Some("p"), "f", Some(&extension)).unwrap_err();
        assert_eq!(
            err,
            PathError::ExtensionTooLong {
                extension_len: 520,
                boundary: 254
            }
        );
    }

    #[test]
    fn test_extension_equal_to_boundary_is_too_long() {
        let limits = PathLimits::new(10, 769);
        // "ab.abcdefgh" is 11 bytes, boundary 9, extension 9.
        let err = synthesize_path(None, b"ab", Some(b".abcdefgh".as_slice()), &limits).unwrap_err();
        assert_eq!(
            err,
            PathError::ExtensionTooLong {
                extension_len: 9,
                boundary: 9
            }
        );
    }

    // ==================== Cascading truncation ====================

    #[test]
    fn test_middle_component_is_excised() {
        let prefix = format!("root/{}", "a".repeat(300));
        let path = build(Some(&prefix), "name", Some(".bin")).unwrap();
        assert_eq!(path, format!("root/{}/name.bin", "a".repeat(254)));
    }

    #[test]
    fn test_every_component_is_limited_in_turn() {
        let prefix = format!("{}/{}", "a".repeat(300), "b".repeat(300));
        let name = "c".repeat(300);
        let path = build(Some(&prefix), &name, Some(".nca")).unwrap();

        let parts: Vec<&str> = path.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "a".repeat(254));
        assert_eq!(parts[1], "b".repeat(254));
        assert_eq!(parts[2], format!("{}.nca", "c".repeat(250)));
        assert_within_limits(&path, &PathLimits::default());
    }

    #[test]
    fn test_separators_in_filename_create_components() {
        let name = format!("{}/file", "d".repeat(260));
        let path = build(Some("out"), &name, Some(".txt")).unwrap();
        assert_eq!(path, format!("out/{}/file.txt", "d".repeat(254)));
    }

    #[test]
    fn test_empty_components_survive() {
        assert_eq!(build(Some("/abs//dir"), "f", None).unwrap(), "/abs//dir/f");
    }

    // ==================== Total length ====================

    #[test]
    fn test_path_too_long_after_truncation() {
        let prefix = vec!["d".repeat(200); 4].join("/");
        let err = build(Some(&prefix), "f", None).unwrap_err();
        assert_eq!(err, PathError::PathTooLong { len: 805, max: 769 });
    }

    #[test]
    fn test_path_length_equal_to_limit_is_rejected() {
        let limits = PathLimits::new(255, 10);
        let err = synthesize_path(None, b"abcdefghij", None, &limits).unwrap_err();
        assert_eq!(err, PathError::PathTooLong { len: 10, max: 10 });
        assert_eq!(
            synthesize_path(None, b"abcdefghi", None, &limits).unwrap(),
            "abcdefghi"
        );
    }

    // ==================== Properties ====================

    #[test]
    fn test_outputs_respect_limits_and_keep_extensions() {
        let names = [
            "short".to_string(),
            "x".repeat(255),
            "x".repeat(1000),
            "é".repeat(200),
            "ゼルダの伝説".repeat(30),
            "👑a".repeat(90),
        ];
        let prefixes = [None, Some("sd:/switch/dumps"), Some("/tmp/")];
        let extensions = [None, Some(".nsp"), Some(".日本")];
        let limits = PathLimits::default();

        for name in &names {
            for prefix in prefixes {
                for extension in extensions {
                    let path = build(prefix, name, extension).unwrap();
                    assert_within_limits(&path, &limits);
                    if let Some(extension) = extension {
                        assert!(path.ends_with(extension), "{path} lost {extension}");
                    }
                }
            }
        }
    }
}
