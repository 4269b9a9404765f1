//! Low-level modal tokenizer for Ballerina source.
//!
//! This crate is standalone: it turns source text into `(RawTag, len)`
//! pairs and owns the lexical mode stack, but resolves no keywords and
//! renders no diagnostics. Highlighters and formatters can use it directly;
//! `bal_lexer` builds the cooked token stream on top.
//!
//! ```text
//! SourceBuffer ─► Cursor ─► RawScanner ─► RawToken { tag, len }
//!                              │
//!                              └─ ModeStack (DEFAULT floor, template frames)
//! ```

pub mod char_class;
mod cursor;
mod literals;
mod mode;
mod punct;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use mode::{Frame, Mode, ModeStack, TemplateFlags, DEFAULT_MAX_DEPTH};
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
