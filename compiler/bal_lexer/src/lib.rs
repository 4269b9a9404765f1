//! Lexer for Ballerina: the modal token emitter.
//!
//! Wraps the raw scanner from `bal_lexer_core` and turns its `(RawTag, len)`
//! stream into [`Token`]s: keywords are resolved (query keywords through the
//! flag-gated table), error tags become [`TokenKind::Error`] with a full
//! [`LexError`] on the side, and every token gets its text, span and
//! line/column.
//!
//! ```text
//! SourceBuffer → RawScanner ─(RawTag, len)→ TokenCooker → Token
//!                    │                          │
//!                 ModeStack                 QueryFlags
//! ```
//!
//! The stream is lossless: concatenating every token's text reproduces the
//! source. Trivia is kept; [`Lexer::significant`] and
//! [`LexOutput::significant`] filter it out.

mod config;
mod cooker;
mod keywords;
mod lex_error;
mod position;
mod query_flags;
mod token;

use std::sync::Once;

use bal_lexer_core::{RawScanner, RawTag};

use crate::cooker::TokenCooker;
use crate::position::LineTracker;

pub use bal_lexer_core::{Frame, Mode, ModeStack, SourceBuffer, TemplateFlags};
pub use config::{LexerConfig, MAX_DEPTH_ENV};
pub use lex_error::{
    LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion, LiteralKind,
    StructureError,
};
pub use position::line_col_at;
pub use query_flags::QueryFlags;
pub use token::{LineCol, Span, Token, TokenKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=bal_lexer=debug` for
/// mode transitions and errors, or `RUST_LOG=bal_lexer=trace` for every
/// token.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Snapshot of the lexer's mutable state between two tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerState {
    /// Active modes, `DEFAULT` floor first.
    pub modes: ModeStack,
    pub template_flags: TemplateFlags,
    pub query_flags: QueryFlags,
    /// Byte offset of the next token.
    pub offset: u32,
    /// Line and column of the next token.
    pub position: LineCol,
}

impl LexerState {
    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.modes.current()
    }
}

/// Pull-based lexer over one source unit.
///
/// Each [`next_token`](Self::next_token) call scans exactly one lexeme.
/// Errors never stop the scan: they come back as `TokenKind::Error` tokens
/// and are collected in [`errors`](Self::errors).
pub struct Lexer<'src> {
    scanner: RawScanner<'src>,
    cooker: TokenCooker,
    lines: LineTracker,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src SourceBuffer) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src SourceBuffer, config: LexerConfig) -> Self {
        Self {
            scanner: RawScanner::with_max_depth(source.cursor(), config.max_nesting_depth),
            cooker: TokenCooker::new(config.max_nesting_depth),
            lines: LineTracker::new(),
        }
    }

    /// Scan the next token.
    ///
    /// Returns `TokenKind::Eof` with empty text at the end, and keeps
    /// returning it on further calls.
    pub fn next_token(&mut self) -> Token<'src> {
        let offset = self.scanner.pos();
        let context = error_context(self.scanner.modes());
        let depth_before = self.scanner.modes().depth();
        let mode_before = self.scanner.mode();

        let raw = self.scanner.next_token();
        let end = offset + raw.len;
        let span = Span::new(offset, end);
        let text = self.scanner.slice(offset, end);
        let kind = if raw.tag == RawTag::UnterminatedTemplate {
            let unclosed = self.scanner.take_unclosed();
            self.cooker.cook_unterminated_template(unclosed, end, context)
        } else {
            self.cooker.cook(raw.tag, span, text, context)
        };

        let start = self.lines.position();
        self.lines.advance(text);
        let token = Token {
            kind,
            text,
            span,
            start,
            end: self.lines.position(),
        };

        let depth = self.scanner.modes().depth();
        if depth != depth_before {
            tracing::debug!(
                from = mode_before.name(),
                to = self.scanner.mode().name(),
                depth,
                offset,
                "mode transition"
            );
        }
        tracing::trace!(
            kind = kind.display_name(),
            span_start = span.start,
            span_end = span.end,
            contextual = self.cooker.last_cook_was_contextual_kw(),
            "token"
        );
        token
    }

    pub fn state(&self) -> LexerState {
        let modes = self.scanner.modes().clone();
        LexerState {
            template_flags: modes.flags(),
            modes,
            query_flags: self.cooker.query_flags(),
            offset: self.scanner.pos(),
            position: self.lines.position(),
        }
    }

    /// Errors reported so far, in source order.
    pub fn errors(&self) -> &[LexError] {
        self.cooker.errors()
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.cooker.into_errors()
    }

    /// The parser's view: remaining tokens without trivia, up to but
    /// excluding `Eof`.
    pub fn significant(self) -> impl Iterator<Item = Token<'src>> {
        self.filter(|token| !token.kind.is_trivia())
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to but excluding `Eof`.
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

/// What the lexer was inside when an error token was scanned.
fn error_context(modes: &ModeStack) -> LexErrorContext {
    match modes.outermost_open() {
        Some(frame) => LexErrorContext::InsideTemplate {
            start: frame.open,
            nesting: u32::try_from(modes.depth() - 1).unwrap_or(u32::MAX),
        },
        None => LexErrorContext::TopLevel,
    }
}

/// All tokens of a source unit and the errors found while scanning them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutput<'src> {
    /// Tokens in source order, ending with `Eof`. Trivia is included unless
    /// [`LexerConfig::keep_trivia`] was off.
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

impl<'src> LexOutput<'src> {
    /// Tokens without trivia, `Eof` included.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().filter(|token| !token.kind.is_trivia())
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a whole source unit with the default configuration.
pub fn lex(source: &SourceBuffer) -> LexOutput<'_> {
    lex_with_config(source, LexerConfig::default())
}

/// Lex a whole source unit.
pub fn lex_with_config(source: &SourceBuffer, config: LexerConfig) -> LexOutput<'_> {
    let mut lexer = Lexer::with_config(source, config);
    let mut tokens = Vec::with_capacity(source.len() as usize / 4 + 1);
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            tokens.push(token);
            break;
        }
        if config.keep_trivia || !token.kind.is_trivia() {
            tokens.push(token);
        }
    }
    tracing::debug!(
        tokens = tokens.len(),
        errors = lexer.errors().len(),
        "lexed source unit"
    );
    LexOutput {
        tokens,
        errors: lexer.into_errors(),
    }
}
