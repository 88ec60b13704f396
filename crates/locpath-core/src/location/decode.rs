//! Strict percent-decoding of URL components.

use percent_encoding::percent_decode_str;

use crate::error::ParseError;

/// Decodes every `%XX` escape in `input`.
///
/// Unlike [`percent_decode_str`] on its own, a `%` that is not followed by two
/// hex digits is an error, as is a decoded byte sequence that is not UTF-8.
pub fn decode_component(input: &str) -> Result<String, ParseError> {
    let malformed = || ParseError::Decode {
        input: input.to_string(),
    };

    let bytes = input.as_bytes();
    let mut i = 0;
    while let Some(offset) = bytes[i..].iter().position(|&b| b == b'%') {
        let at = i + offset;
        let escape = bytes.get(at + 1..at + 3).ok_or_else(malformed)?;
        if !escape.iter().all(u8::is_ascii_hexdigit) {
            return Err(malformed());
        }
        i = at + 3;
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| malformed())
}
