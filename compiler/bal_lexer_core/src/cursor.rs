//! Byte cursor shared by every scanning mode.
//!
//! Reads run off the end of the source into the `0x00` sentinel and its
//! zero padding instead of checking bounds, so delimiter lookahead such as
//! `<!--` or `]]>` is a plain slice compare.
//!
//! A `0x00` before `source_len` is a NUL inside the source, not the end.

use crate::char_class::{is_newline_byte, is_whitespace_byte};
use crate::source_buffer::MAX_LOOKAHEAD;

/// Smaller of two optional hit offsets.
///
/// Combines results from separate memchr calls when a mode stops on more
/// bytes than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Read position in a [`SourceBuffer`](crate::SourceBuffer).
///
/// Obtained from [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a literal scanner can snapshot it, try a
/// rule, and restore the snapshot on `NoMatch`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Source bytes, then the sentinel, then zero padding.
    buf: &'a [u8],
    /// Byte offset of the next unread byte.
    pos: u32,
    source_len: u32,
}

// Copied on every snapshot.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Cursor at offset 0.
    ///
    /// `buf[source_len]` must be `0x00` and followed by at least
    /// `MAX_LOOKAHEAD` bytes of zero padding.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            source_len as usize + MAX_LOOKAHEAD < buf.len(),
            "padding must cover the longest lookahead"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// The byte under the cursor; `0x00` both at the end and on a NUL in
    /// the source.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// The byte before the cursor, or `0x00` at offset 0.
    #[inline]
    pub fn prev(&self) -> u8 {
        match self.pos {
            0 => 0,
            pos => self.buf[pos as usize - 1],
        }
    }

    /// Returns `true` if the bytes at the cursor start with `pattern`.
    ///
    /// `pattern` must be no longer than the buffer's lookahead padding;
    /// every delimiter in the grammar is.
    #[inline]
    pub fn starts_with(&self, pattern: &[u8]) -> bool {
        debug_assert!(pattern.len() <= MAX_LOOKAHEAD);
        let at = self.pos as usize;
        &self.buf[at..at + pattern.len()] == pattern
    }

    /// Consume `pattern` if the bytes at the cursor start with it.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "pattern.len() <= MAX_LOOKAHEAD"
    )]
    pub fn eat_if(&mut self, pattern: &[u8]) -> bool {
        if self.starts_with(pattern) {
            self.pos += pattern.len() as u32;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` on the sentinel, never on a NUL inside the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source text between two byte offsets.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on character
    /// boundaries. Token boundaries always do: the scanner only stops
    /// between whole UTF-8 sequences.
    #[allow(
        unsafe_code,
        reason = "the buffer is copied from a &str and tokens end on char boundaries"
    )]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        // SAFETY: `buf[..source_len]` is a copy of a `&str`, and both offsets
        // are character boundaries inside it.
        unsafe { std::str::from_utf8_unchecked(&self.buf[start as usize..end as usize]) }
    }

    /// Source text from `start` up to the cursor.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// The unread remainder of the source.
    pub fn rest(&self) -> &'a str {
        self.slice(self.pos.min(self.source_len), self.source_len)
    }

    /// Decode the character starting at byte offset `at`.
    ///
    /// Returns `None` at or past EOF. `at` must be a character boundary.
    pub fn char_at(&self, at: u32) -> Option<char> {
        if at >= self.source_len {
            return None;
        }
        let width = Self::utf8_char_width(self.buf[at as usize]);
        let end = (at + width).min(self.source_len);
        self.slice(at, end).chars().next()
    }

    /// Decode the character at the current position.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    /// Byte-wise scan; `pred(0)` must be false or the loop runs into the
    /// padding.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance while `pred` holds for the current character.
    ///
    /// Works on whole characters, so identifier and XML name scanning can
    /// classify non-ASCII code points.
    pub fn eat_chars_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current_char() {
            if !pred(c) {
                break;
            }
            self.advance_n(Self::utf8_char_width(self.current()));
        }
    }

    /// Encoded length of the character whose lead byte is `byte`. Stray
    /// continuation bytes count as one.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance to the next `\n` or `\r` byte, or EOF.
    ///
    /// Used by the comment scanner; the line terminator is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are below source_len, a u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'\n', b'\r', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance to the first byte that appears in `needles`.
    ///
    /// Returns the byte found, or `None` with the cursor at EOF. Needles are
    /// searched three at a time with `memchr3` and the earliest hit wins.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offsets are below source_len, a u32"
    )]
    pub fn skip_to_any(&mut self, needles: &[u8]) -> Option<u8> {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let offset = needles
            .chunks(3)
            .map(|chunk| match *chunk {
                [a] => memchr::memchr(a, remaining),
                [a, b] => memchr::memchr2(a, b, remaining),
                [a, b, c] => memchr::memchr3(a, b, c, remaining),
                _ => None,
            })
            .fold(None, earliest_of);

        if let Some(found) = offset {
            self.pos += found as u32;
            Some(self.buf[self.pos as usize])
        } else {
            self.pos = self.source_len;
            None
        }
    }

    /// Advance past horizontal whitespace: space, tab, form feed.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace_byte);
    }

    /// Advance past any whitespace, line terminators included.
    pub fn eat_whitespace_and_newlines(&mut self) {
        self.eat_while(|b| is_whitespace_byte(b) || is_newline_byte(b));
    }
}
