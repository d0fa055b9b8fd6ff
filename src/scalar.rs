//! YAML scalar text normalization.
//!
//! Symfony service files mix bare, single-quoted, and double-quoted
//! scalars freely (`name: kernel.event_listener`, `name:
//! 'kernel.event_listener'`, `name: "kernel.event_listener"`). Lookups
//! must treat all three spellings as the same logical value, so every
//! scalar read goes through [`strip_scalar_quotes`] first.

/// Strip one matched pair of surrounding quotes from a raw scalar text.
///
/// Works at the syntax level only: exactly one leading and one trailing
/// quote are removed when they match, and escape sequences inside the
/// quotes are left untouched. Anything else (bare scalars, unmatched
/// quotes) is returned as-is.
pub fn strip_scalar_quotes(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    // A lone quote character must not match itself as a pair.
    if bytes.len() < 2 {
        return raw;
    }

    let first = bytes[0];
    let last = bytes[bytes.len() - 1];
    if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
        return &raw[1..raw.len() - 1];
    }

    raw
}
