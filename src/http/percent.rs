//! Percent-decoding module
//!
//! Decodes `%XX` escapes in request paths before they are echoed. Paths are
//! not query strings: `+` is a literal plus sign here, never a space.

/// Decode percent-escapes in a URL path.
///
/// Malformed escapes (`%` followed by fewer than two hex digits) are kept
/// verbatim rather than rejected, and decoded bytes that do not form valid
/// UTF-8 are replaced with U+FFFD.
pub fn decode_path(path: &str) -> String {
    if !path.contains('%') {
        return path.to_owned();
    }

    let bytes = path.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                decoded.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
