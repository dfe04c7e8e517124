//! Case-normalized VHDL identifiers.
//!
//! Basic identifiers are case-insensitive, so every library, unit and
//! architecture name is stored upper-cased. Extended identifiers
//! (`\Like This\`) are case-sensitive and kept exactly as written.

use smol_str::SmolStr;

/// A normalized identifier. Cheap to clone, inline for short names.
pub type Name = SmolStr;

/// Normalize an identifier as written in source or on a selector.
pub fn normalize(text: &str) -> Name {
    if is_extended(text) {
        SmolStr::new(text)
    } else {
        SmolStr::new(text.to_ascii_uppercase())
    }
}

/// Check that `text` is a basic or extended VHDL identifier.
///
/// Basic identifiers start with a letter, continue with letters, digits and
/// single underscores, and do not end in an underscore.
pub fn is_valid_identifier(text: &str) -> bool {
    if is_extended(text) {
        return text.len() > 2;
    }

    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !unicode_ident::is_xid_start(first) {
        return false;
    }

    let mut prev_underscore = false;
    for c in chars {
        if !unicode_ident::is_xid_continue(c) {
            return false;
        }
        if c == '_' && prev_underscore {
            return false;
        }
        prev_underscore = c == '_';
    }
    !prev_underscore
}

fn is_extended(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('\\') && text.ends_with('\\')
}
