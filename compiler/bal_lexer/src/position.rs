//! Line and column tracking.
//!
//! `\n` ends a line (so `\r\n` does too); a lone `\r` is whitespace and
//! counts as a column. Columns count Unicode scalar values, not bytes.

use crate::token::LineCol;

/// Incremental position over a token stream.
///
/// Fed each token's text in order; never rescans earlier input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct LineTracker {
    pos: LineCol,
}

impl LineTracker {
    pub(crate) fn new() -> Self {
        Self {
            pos: LineCol::START,
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> LineCol {
        self.pos
    }

    /// Advance past `text`, the lexeme just consumed.
    pub(crate) fn advance(&mut self, text: &str) {
        let bytes = text.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', bytes).count();
                self.pos.line = self.pos.line.saturating_add(saturate(newlines));
                self.pos.col = 1 + saturate(text[last + 1..].chars().count());
            }
            None => {
                self.pos.col = self.pos.col.saturating_add(saturate(text.chars().count()));
            }
        }
    }
}

/// Position of byte `offset` in `source`.
///
/// For diagnostics that start somewhere other than the current token, such
/// as an unterminated template reported from its opener. `offset` past the
/// end clamps to the end; an offset inside a character counts it.
pub fn line_col_at(source: &str, offset: u32) -> LineCol {
    let end = (offset as usize).min(source.len());
    let before = &source.as_bytes()[..end];
    let line_start = memchr::memrchr(b'\n', before).map_or(0, |nl| nl + 1);
    let line = 1 + memchr::memchr_iter(b'\n', before).count();
    let col = 1 + String::from_utf8_lossy(&before[line_start..]).chars().count();
    LineCol::new(saturate(line), saturate(col))
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
