//! Display-safe percent decoding.
//!
//! Cookie values are often percent-encoded by whoever set them. Decoding must
//! never abort rendering: malformed input is shown as-is.

#[cfg(test)]
#[path = "decode_test.rs"]
mod decode_test;

/// Percent-decode `raw`, falling back to `raw` itself when it is malformed.
///
/// Malformed means a `%` not followed by two hex digits, or escapes that do
/// not decode to UTF-8. `+` is left alone.
#[must_use]
pub fn safe_decode(raw: &str) -> String {
    if !has_well_formed_escapes(raw) {
        return raw.to_owned();
    }
    urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
}

fn has_well_formed_escapes(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}
