//! Shared formatting helpers used when naming dump outputs.

/// Render `data` as a hex string, e.g. title IDs embedded in file names.
pub fn hex_string(data: &[u8], uppercase: bool) -> String {
    data.iter()
        .map(|byte| {
            if uppercase {
                format!("{byte:02X}")
            } else {
                format!("{byte:02x}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_lower_and_upper() {
        let id = [0x01, 0x00, 0xAB, 0xCD, 0x00, 0x0F, 0x20, 0x00];
        assert_eq!(hex_string(&id, false), "0100abcd000f2000");
        assert_eq!(hex_string(&id, true), "0100ABCD000F2000");
    }

    #[test]
    fn test_hex_empty() {
        assert_eq!(hex_string(&[], true), "");
    }
}
