//! Literal scanners.
//!
//! Each scanner starts with the cursor on the literal's first byte and
//! leaves it after the consumed lexeme. Scanners that may find their prefix
//! is not a literal after all return `Option<RawTag>`; `None` means
//! `NoMatch`, and the caller restores its cursor snapshot and tries the
//! next rule. Once a prefix commits (`0x`, an opening quote), the result is
//! always a tag, with malformed bodies reported as error tags spanning what
//! was consumed.

use crate::char_class::{
    is_binary_digit_byte, is_digit_byte, is_hex_digit_byte, is_identifier_continue,
    is_identifier_start, is_newline_byte, is_octal_digit_byte, is_whitespace_byte,
    is_xml_name_char, is_xml_name_start_char,
};
use crate::cursor::Cursor;
use crate::tag::RawTag;

// ─── Numbers ────────────────────────────────────────────────────────────

/// Outcome of eating one digit group.
#[derive(Clone, Copy, Debug)]
struct DigitRun {
    digits: u32,
    well_formed: bool,
}

/// Eat digits accepted by `is_digit`, with single underscores between them.
///
/// An underscore is only consumed when a digit or another underscore
/// follows it, so a trailing `_` is left for the next token. A leading or
/// doubled underscore is consumed and marks the run malformed.
fn digit_run(cursor: &mut Cursor<'_>, is_digit: fn(u8) -> bool) -> DigitRun {
    let mut run = DigitRun {
        digits: 0,
        well_formed: true,
    };
    let mut prev_underscore = false;
    loop {
        let b = cursor.current();
        if is_digit(b) {
            run.digits += 1;
            prev_underscore = false;
        } else if b == b'_' && (is_digit(cursor.peek()) || cursor.peek() == b'_') {
            if run.digits == 0 || prev_underscore {
                run.well_formed = false;
            }
            prev_underscore = true;
        } else {
            break;
        }
        cursor.advance();
    }
    run
}

/// `true` if the character at `cursor.pos() + offset` cannot continue an
/// identifier, so a suffix letter before it stands alone.
fn ends_word(cursor: &Cursor<'_>, offset: u32) -> bool {
    !cursor
        .char_at(cursor.pos() + offset)
        .is_some_and(is_identifier_continue)
}

/// Consume a float suffix (`f`, `F`, `d`, `D`) if one stands alone here.
fn eat_float_suffix(cursor: &mut Cursor<'_>) -> bool {
    if matches!(cursor.current(), b'f' | b'F' | b'd' | b'D') && ends_word(cursor, 1) {
        cursor.advance();
        true
    } else {
        false
    }
}

/// Consume the long suffix (`n`, `N`) if one stands alone here.
fn eat_long_suffix(cursor: &mut Cursor<'_>) {
    if matches!(cursor.current(), b'n' | b'N') && ends_word(cursor, 1) {
        cursor.advance();
    }
}

/// Scan a numeric literal starting at a digit, or at `.` followed by a digit.
pub(crate) fn number(cursor: &mut Cursor<'_>) -> RawTag {
    if cursor.current() == b'0' {
        match cursor.peek() {
            b'x' | b'X' => {
                cursor.advance_n(2);
                return hex_number(cursor);
            }
            b'o' | b'O' => {
                cursor.advance_n(2);
                return radix_int(
                    cursor,
                    is_octal_digit_byte,
                    RawTag::OctalInt,
                    RawTag::MalformedOctalInt,
                );
            }
            b'b' | b'B' => {
                cursor.advance_n(2);
                return radix_int(
                    cursor,
                    is_binary_digit_byte,
                    RawTag::BinaryInt,
                    RawTag::MalformedBinaryInt,
                );
            }
            _ => {}
        }
    }
    decimal_number(cursor)
}

fn radix_int(
    cursor: &mut Cursor<'_>,
    is_digit: fn(u8) -> bool,
    ok: RawTag,
    malformed: RawTag,
) -> RawTag {
    // An underscore straight after the prefix is always part of the literal.
    let mut leading_underscore = false;
    if cursor.current() == b'_' {
        cursor.eat_while(|b| b == b'_');
        leading_underscore = true;
    }
    let run = digit_run(cursor, is_digit);
    if leading_underscore || run.digits == 0 || !run.well_formed {
        return malformed;
    }
    eat_long_suffix(cursor);
    ok
}

fn decimal_number(cursor: &mut Cursor<'_>) -> RawTag {
    let mut well_formed = true;
    let mut is_float = false;

    if cursor.current() != b'.' {
        well_formed &= digit_run(cursor, is_digit_byte).well_formed;
    }

    // Fraction: `.` must be followed by a digit, so `1..5` and `1.foo` stay
    // integer-then-operator.
    if cursor.current() == b'.' && is_digit_byte(cursor.peek()) {
        cursor.advance();
        well_formed &= digit_run(cursor, is_digit_byte).well_formed;
        is_float = true;
    }

    if matches!(cursor.current(), b'e' | b'E') {
        let snapshot = *cursor;
        cursor.advance();
        if matches!(cursor.current(), b'+' | b'-') {
            cursor.advance();
        }
        if is_digit_byte(cursor.current()) {
            well_formed &= digit_run(cursor, is_digit_byte).well_formed;
            is_float = true;
        } else if is_float {
            well_formed = false;
        } else {
            *cursor = snapshot;
        }
    }

    if eat_float_suffix(cursor) {
        is_float = true;
    } else if !is_float {
        eat_long_suffix(cursor);
    }

    match (is_float, well_formed) {
        (true, true) => RawTag::DecimalFloat,
        (true, false) => RawTag::MalformedDecimalFloat,
        (false, true) => RawTag::DecimalInt,
        (false, false) => RawTag::MalformedDecimalInt,
    }
}

/// Hex integer or hex float; cursor is just past `0x`.
fn hex_number(cursor: &mut Cursor<'_>) -> RawTag {
    let mut leading_underscore = false;
    if cursor.current() == b'_' {
        cursor.eat_while(|b| b == b'_');
        leading_underscore = true;
    }
    let int_part = digit_run(cursor, is_hex_digit_byte);
    let mut well_formed = !leading_underscore && int_part.well_formed;

    let before_fraction = *cursor;
    let mut fraction = DigitRun {
        digits: 0,
        well_formed: true,
    };
    if cursor.current() == b'.' && is_hex_digit_byte(cursor.peek()) {
        cursor.advance();
        fraction = digit_run(cursor, is_hex_digit_byte);
    }

    let has_exponent = matches!(cursor.current(), b'p' | b'P')
        && (is_digit_byte(cursor.peek())
            || (matches!(cursor.peek(), b'+' | b'-') && is_digit_byte(cursor.peek2())));

    if has_exponent {
        cursor.advance();
        if matches!(cursor.current(), b'+' | b'-') {
            cursor.advance();
        }
        let exponent = digit_run(cursor, is_digit_byte);
        well_formed &= fraction.well_formed && exponent.well_formed;
        eat_float_suffix(cursor);
        let has_mantissa = int_part.digits > 0 || fraction.digits > 0;
        return if well_formed && has_mantissa {
            RawTag::HexFloat
        } else {
            RawTag::MalformedHexFloat
        };
    }

    if fraction.digits > 0 {
        if matches!(cursor.current(), b'p' | b'P') {
            // `0x1.8p`: committed to a hex float with no exponent digits.
            cursor.advance();
            if matches!(cursor.current(), b'+' | b'-') {
                cursor.advance();
            }
            return RawTag::MalformedHexFloat;
        }
        // No binary exponent: the fraction belongs to the next tokens.
        *cursor = before_fraction;
    }

    if int_part.digits == 0 || !well_formed {
        return RawTag::MalformedHexInt;
    }
    eat_long_suffix(cursor);
    RawTag::HexInt
}

// ─── Strings ────────────────────────────────────────────────────────────

/// Consume one escape sequence; cursor is on the backslash.
///
/// Returns `false` for an invalid escape. A line terminator or EOF after
/// the backslash is left unconsumed so the caller reports it.
fn escape(cursor: &mut Cursor<'_>) -> bool {
    cursor.advance();
    match cursor.current() {
        b'n' | b't' | b'\\' | b'"' | b'\'' | b'b' | b'f' | b'r' => {
            cursor.advance();
            true
        }
        b'0'..=b'3'
            if is_octal_digit_byte(cursor.peek()) && is_octal_digit_byte(cursor.peek2()) =>
        {
            cursor.advance_n(3);
            true
        }
        b'u' => {
            cursor.advance();
            for _ in 0..4 {
                if !is_hex_digit_byte(cursor.current()) {
                    return false;
                }
                cursor.advance();
            }
            true
        }
        b'\n' | b'\r' => false,
        0 if cursor.is_eof() => false,
        _ => {
            cursor.advance_char();
            false
        }
    }
}

/// Double-quoted string literal; cursor is on the opening `"`.
///
/// A newline or EOF before the closing quote yields `UnterminatedString`
/// spanning the quote up to the terminator.
pub(crate) fn string(cursor: &mut Cursor<'_>) -> RawTag {
    cursor.advance();
    let mut well_formed = true;
    loop {
        match cursor.skip_to_any(b"\"\\\n\r") {
            Some(b'"') => {
                cursor.advance();
                return if well_formed {
                    RawTag::String
                } else {
                    RawTag::MalformedString
                };
            }
            Some(b'\\') => well_formed &= escape(cursor),
            _ => return RawTag::UnterminatedString,
        }
    }
}

/// Backtick-quoted identifier; cursor is on the opening backtick.
pub(crate) fn quoted_identifier(cursor: &mut Cursor<'_>) -> RawTag {
    cursor.advance();
    loop {
        match cursor.skip_to_any(b"`\\\n\r") {
            Some(b'`') => {
                cursor.advance();
                return RawTag::QuotedIdent;
            }
            Some(b'\\') => {
                cursor.advance();
                if !matches!(cursor.current(), b'\n' | b'\r') && !cursor.is_eof() {
                    cursor.advance_char();
                }
            }
            _ => return RawTag::UnterminatedQuotedIdent,
        }
    }
}

/// `'name` symbolic string; cursor is on the quote.
///
/// `None` if no identifier character follows the quote.
pub(crate) fn symbolic_string(cursor: &mut Cursor<'_>) -> Option<RawTag> {
    let first = cursor.char_at(cursor.pos() + 1)?;
    if !is_identifier_start(first) {
        return None;
    }
    cursor.advance();
    cursor.eat_chars_while(is_identifier_continue);
    Some(RawTag::SymbolicString)
}

// ─── Blobs ──────────────────────────────────────────────────────────────

/// Which encoding a blob literal uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BlobBase {
    Base16,
    Base64,
}

/// Blob body and closing backtick; cursor is just past the opening one.
pub(crate) fn blob(cursor: &mut Cursor<'_>, base: BlobBase) -> RawTag {
    let body_start = cursor.pos();
    if cursor.skip_to_any(b"`").is_none() {
        return RawTag::UnterminatedBlob;
    }
    let body = cursor.slice_from(body_start);
    cursor.advance();

    let valid = match base {
        BlobBase::Base16 => is_base16_body(body),
        BlobBase::Base64 => is_base64_body(body),
    };
    match (base, valid) {
        (_, false) => RawTag::MalformedBlob,
        (BlobBase::Base16, true) => RawTag::Base16Blob,
        (BlobBase::Base64, true) => RawTag::Base64Blob,
    }
}

fn blob_chars(body: &str) -> impl Iterator<Item = u8> + '_ {
    body.bytes()
        .filter(|&b| !is_whitespace_byte(b) && !is_newline_byte(b))
}

/// Pairs of hex digits; whitespace may separate any two digits.
fn is_base16_body(body: &str) -> bool {
    let mut count = 0usize;
    for b in blob_chars(body) {
        if !is_hex_digit_byte(b) {
            return false;
        }
        count += 1;
    }
    count % 2 == 0
}

/// Groups of four base64 characters, the last group optionally padded.
fn is_base64_body(body: &str) -> bool {
    let mut count = 0usize;
    let mut padding = 0usize;
    for b in blob_chars(body) {
        match b {
            b'=' => padding += 1,
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' if padding == 0 => {}
            _ => return false,
        }
        count += 1;
    }
    padding <= 2 && count % 4 == 0
}

// ─── XML references ─────────────────────────────────────────────────────

/// `&name;`, `&#123;` or `&#x7B;`; cursor is on the ampersand.
pub(crate) fn xml_reference(cursor: &mut Cursor<'_>) -> RawTag {
    cursor.advance();
    if cursor.current() == b'#' {
        cursor.advance();
        let digits_start = cursor.pos();
        if cursor.current() == b'x' {
            cursor.advance();
            cursor.eat_while(is_hex_digit_byte);
            if cursor.pos() == digits_start + 1 {
                return RawTag::MalformedXmlReference;
            }
        } else {
            cursor.eat_while(is_digit_byte);
            if cursor.pos() == digits_start {
                return RawTag::MalformedXmlReference;
            }
        }
        return close_reference(cursor, RawTag::CharRef);
    }

    match cursor.current_char() {
        Some(c) if is_xml_name_start_char(c) => {
            cursor.eat_chars_while(is_xml_name_char);
            close_reference(cursor, RawTag::EntityRef)
        }
        _ => RawTag::MalformedXmlReference,
    }
}

fn close_reference(cursor: &mut Cursor<'_>, tag: RawTag) -> RawTag {
    if cursor.current() == b';' {
        cursor.advance();
        tag
    } else {
        RawTag::MalformedXmlReference
    }
}
