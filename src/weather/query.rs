//! Query-string encoding for city names and keys.

use std::fmt::Write;

/// Encodes a value for use in a URL query string.
///
/// ASCII alphanumerics and `_ . ~` pass through, space becomes `+`, and every
/// other byte (hyphen included) is written as `%XX`.
pub fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}
