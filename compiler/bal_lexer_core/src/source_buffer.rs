//! Owned copy of one source unit, padded for unchecked lookahead.
//!
//! The copy is followed by a `0x00` sentinel and enough zero bytes that
//! every delimiter compare the template modes make (`<![CDATA[`, `` ``` ``,
//! `-->`) stays inside the allocation, even from the last source byte.

use crate::Cursor;

/// Allocation granularity.
const CACHE_LINE: usize = 64;

/// Longest fixed lookahead any scanning rule performs past the cursor.
///
/// `<![CDATA[` is nine bytes; padding must always cover it even when the
/// cursor sits on the last source byte.
pub(crate) const MAX_LOOKAHEAD: usize = 9;

/// Source text as the scanner reads it.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Offsets are `u32`, so a source over 4 GiB is cut at the last
    /// character boundary that fits.
    pub fn new(source: &str) -> Self {
        let mut source_bytes = source.as_bytes();
        if u32::try_from(source_bytes.len()).is_err() {
            let mut cut = u32::MAX as usize;
            while !source.is_char_boundary(cut) {
                cut -= 1;
            }
            source_bytes = &source_bytes[..cut];
        }
        let source_len = source_bytes.len();

        // Sentinel, lookahead padding, then round up to CACHE_LINE.
        let padded_len =
            (source_len + 1 + MAX_LOOKAHEAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// The source itself.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// The source followed by the sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Source length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
