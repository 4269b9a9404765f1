//! Character classification.
//!
//! Pure predicates over a single code point. Every code point classifies
//! deterministically; nothing here has state or can fail.
//!
//! Identifier classes follow Unicode `XID_Start`/`XID_Continue` (via
//! `unicode-ident`), which covers letters in every plane, connector
//! punctuation and combining marks. XML name classes follow the XML 1.0
//! `NameStartChar`/`NameChar` productions with `:` removed, because the tag
//! mode emits the qualified-name separator as its own token.

use unicode_ident::{is_xid_continue, is_xid_start};

/// Unicode letter (any alphabetic code point).
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_digit_byte)
}

#[inline]
pub fn is_hex_digit(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_hex_digit_byte)
}

#[inline]
pub fn is_octal_digit(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_octal_digit_byte)
}

#[inline]
pub fn is_binary_digit(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_binary_digit_byte)
}

/// First character of an identifier: `_` or any `XID_Start` code point.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        c == '_' || c.is_ascii_alphabetic()
    } else {
        is_xid_start(c)
    }
}

/// Subsequent identifier character: `XID_Continue`.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    match u8::try_from(c) {
        Ok(b) if b.is_ascii() => is_ident_continue_byte(b),
        _ => is_xid_continue(c),
    }
}

/// Horizontal whitespace: space, tab, form feed.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_whitespace_byte)
}

#[inline]
pub fn is_newline(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_newline_byte)
}

/// XML 1.0 `NameStartChar`, excluding `:`.
pub fn is_xml_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | '_'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

/// XML 1.0 `NameChar`, excluding `:`.
pub fn is_xml_name_char(c: char) -> bool {
    is_xml_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

/// 256-byte lookup table for ASCII identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore. The sentinel byte (0x00) maps
/// to `false`, so byte loops driven by it stop at EOF.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Byte-level fast path for identifier continuation. Non-ASCII bytes
/// answer `false`; callers decode the full character for those.
#[inline]
pub(crate) fn is_ident_continue_byte(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

// Byte forms of the classes above. The scanners walk bytes, and none of
// these classes contains a non-ASCII code point.

#[inline]
pub(crate) fn is_digit_byte(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub(crate) fn is_hex_digit_byte(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub(crate) fn is_octal_digit_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub(crate) fn is_binary_digit_byte(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
pub(crate) fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0C)
}

#[inline]
pub(crate) fn is_newline_byte(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}
