//! Raw tags to token kinds.
//!
//! ```text
//! RawScanner ─(RawTag, len)→ TokenCooker ─→ TokenKind
//! ```
//!
//! Punctuation, template delimiters and text runs map one to one.
//! Identifiers go through the query table first, whose answer depends on
//! [`QueryFlags`], and then the reserved words. Error tags record a
//! [`LexError`] and come back as `TokenKind::Error`.
//!
//! Mode state belongs to the scanner; query state belongs here.

use bal_lexer_core::{Frame, Mode, RawTag};

use crate::keywords;
use crate::lex_error::{LexError, LexErrorContext, LexErrorKind, LiteralKind};
use crate::query_flags::QueryFlags;
use crate::token::{Span, TokenKind};

/// Keyword and error resolution for one source unit.
pub(crate) struct TokenCooker {
    query: QueryFlags,
    /// Nesting limit, for the `NestingTooDeep` suggestion.
    max_depth: u32,
    errors: Vec<LexError>,
    /// Set when the current `cook()` resolves a query keyword.
    contextual_kw: bool,
}

impl TokenCooker {
    pub(crate) fn new(max_depth: u32) -> Self {
        Self {
            query: QueryFlags::empty(),
            max_depth,
            errors: Vec::new(),
            contextual_kw: false,
        }
    }

    pub(crate) fn query_flags(&self) -> QueryFlags {
        self.query
    }

    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub(crate) fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Check if the most recent `cook()` resolved a query keyword.
    pub(crate) fn last_cook_was_contextual_kw(&self) -> bool {
        self.contextual_kw
    }

    /// Resolve one raw token.
    ///
    /// `text` is the token's source slice at `span`. `context` describes
    /// the template frames open before the token was scanned.
    pub(crate) fn cook(
        &mut self,
        tag: RawTag,
        span: Span,
        text: &str,
        context: LexErrorContext,
    ) -> TokenKind {
        self.contextual_kw = false;
        match tag {
            // Identifiers & literals
            RawTag::Ident => self.cook_ident(text),
            RawTag::QuotedIdent => TokenKind::QuotedIdent,
            RawTag::DecimalInt => TokenKind::DecimalInt,
            RawTag::HexInt => TokenKind::HexInt,
            RawTag::OctalInt => TokenKind::OctalInt,
            RawTag::BinaryInt => TokenKind::BinaryInt,
            RawTag::DecimalFloat => TokenKind::DecimalFloat,
            RawTag::HexFloat => TokenKind::HexFloat,
            RawTag::String => TokenKind::String,
            RawTag::SymbolicString => TokenKind::SymbolicString,
            RawTag::Base16Blob => TokenKind::Base16Blob,
            RawTag::Base64Blob => TokenKind::Base64Blob,

            // Template delimiters
            RawTag::XmlLiteralStart => TokenKind::XmlLiteralStart,
            RawTag::XmlLiteralEnd => TokenKind::XmlLiteralEnd,
            RawTag::StringTemplateStart => TokenKind::StringTemplateStart,
            RawTag::StringTemplateEnd => TokenKind::StringTemplateEnd,
            RawTag::DeprecatedTemplateStart => TokenKind::DeprecatedTemplateStart,
            RawTag::DeprecatedTemplateEnd => TokenKind::DeprecatedTemplateEnd,
            RawTag::ExpressionStart => TokenKind::ExpressionStart,
            RawTag::ExpressionEnd => TokenKind::ExpressionEnd,
            RawTag::TripleBacktickStart => TokenKind::TripleBacktickStart,
            RawTag::TripleBacktickEnd => TokenKind::TripleBacktickEnd,
            RawTag::DoubleBacktickStart => TokenKind::DoubleBacktickStart,
            RawTag::DoubleBacktickEnd => TokenKind::DoubleBacktickEnd,
            RawTag::SingleBacktickStart => TokenKind::SingleBacktickStart,
            RawTag::SingleBacktickEnd => TokenKind::SingleBacktickEnd,

            // Documentation
            RawTag::DocumentationLineStart => TokenKind::DocumentationLineStart,
            RawTag::ParameterDocumentationStart => TokenKind::ParameterDocumentationStart,
            RawTag::ReturnParameterDocumentationStart => {
                TokenKind::ReturnParameterDocumentationStart
            }
            RawTag::DescriptionSeparator => TokenKind::DescriptionSeparator,
            RawTag::DocumentationEnd => TokenKind::DocumentationEnd,
            RawTag::DocumentationParamEnd => TokenKind::DocumentationParamEnd,
            RawTag::DocumentationText => TokenKind::DocumentationText,
            RawTag::DefinitionReference => TokenKind::DefinitionReference,
            RawTag::ParameterName => TokenKind::ParameterName,

            // Template text
            RawTag::XmlText => TokenKind::XmlText,
            RawTag::XmlPiText => TokenKind::XmlPiText,
            RawTag::XmlCommentText => TokenKind::XmlCommentText,
            RawTag::XmlDoubleQuotedText => TokenKind::XmlDoubleQuotedText,
            RawTag::XmlSingleQuotedText => TokenKind::XmlSingleQuotedText,
            RawTag::StringTemplateText => TokenKind::StringTemplateText,
            RawTag::DeprecatedTemplateText => TokenKind::DeprecatedTemplateText,
            RawTag::TripleBacktickContent => TokenKind::TripleBacktickContent,
            RawTag::DoubleBacktickContent => TokenKind::DoubleBacktickContent,
            RawTag::SingleBacktickContent => TokenKind::SingleBacktickContent,

            // XML markup
            RawTag::XmlTagOpen => TokenKind::XmlTagOpen,
            RawTag::XmlTagOpenSlash => TokenKind::XmlTagOpenSlash,
            RawTag::XmlTagSpecialOpen => TokenKind::XmlTagSpecialOpen,
            RawTag::XmlTagClose => TokenKind::XmlTagClose,
            RawTag::XmlTagSlashClose => TokenKind::XmlTagSlashClose,
            RawTag::XmlTagSpecialClose => TokenKind::XmlTagSpecialClose,
            RawTag::XmlCommentStart => TokenKind::XmlCommentStart,
            RawTag::XmlCommentEnd => TokenKind::XmlCommentEnd,
            RawTag::XmlQName => TokenKind::XmlQName,
            RawTag::XmlQNameSeparator => TokenKind::XmlQNameSeparator,
            RawTag::XmlEquals => TokenKind::XmlEquals,
            RawTag::XmlSlash => TokenKind::XmlSlash,
            RawTag::XmlDoubleQuote => TokenKind::XmlDoubleQuote,
            RawTag::XmlDoubleQuoteEnd => TokenKind::XmlDoubleQuoteEnd,
            RawTag::XmlSingleQuote => TokenKind::XmlSingleQuote,
            RawTag::XmlSingleQuoteEnd => TokenKind::XmlSingleQuoteEnd,
            RawTag::Cdata => TokenKind::XmlCdata,
            RawTag::Dtd => TokenKind::XmlDtd,
            RawTag::EntityRef => TokenKind::XmlEntityRef,
            RawTag::CharRef => TokenKind::XmlCharRef,

            // Direct-map operators
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Colon => TokenKind::Colon,
            RawTag::ColonColon => TokenKind::DoubleColon,
            RawTag::Dot => TokenKind::Dot,
            RawTag::Comma => TokenKind::Comma,
            RawTag::LeftBrace => TokenKind::LBrace,
            RawTag::RightBrace => TokenKind::RBrace,
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::Question => TokenKind::Question,
            RawTag::Assign => TokenKind::Eq,
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Percent => TokenKind::Percent,
            RawTag::Bang => TokenKind::Bang,
            RawTag::Ampersand => TokenKind::Amp,
            RawTag::Caret => TokenKind::Caret,
            RawTag::Tilde => TokenKind::Tilde,
            RawTag::At => TokenKind::At,
            RawTag::Pipe => TokenKind::Pipe,
            RawTag::Greater => TokenKind::Gt,
            RawTag::Less => TokenKind::Lt,

            // Compound operators
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::BangEqual => TokenKind::NotEq,
            RawTag::GreaterEqual => TokenKind::GtEq,
            RawTag::LessEqual => TokenKind::LtEq,
            RawTag::AmpersandAmpersand => TokenKind::AmpAmp,
            RawTag::PipePipe => TokenKind::PipePipe,
            RawTag::RightArrow => TokenKind::Arrow,
            RawTag::LeftArrow => TokenKind::LeftArrow,
            RawTag::DotDot => TokenKind::DotDot,
            RawTag::DotDotDot => TokenKind::DotDotDot,
            RawTag::DotDotLess => TokenKind::DotDotLt,
            RawTag::FatArrow => TokenKind::FatArrow,
            RawTag::Elvis => TokenKind::Elvis,
            RawTag::PlusEqual => TokenKind::PlusEq,
            RawTag::MinusEqual => TokenKind::MinusEq,
            RawTag::StarEqual => TokenKind::StarEq,
            RawTag::SlashEqual => TokenKind::SlashEq,
            RawTag::AmpersandEqual => TokenKind::AmpEq,
            RawTag::PipeEqual => TokenKind::PipeEq,
            RawTag::CaretEqual => TokenKind::CaretEq,
            RawTag::ShlEqual => TokenKind::ShlEq,
            RawTag::ShrEqual => TokenKind::ShrEq,
            RawTag::UshrEqual => TokenKind::UshrEq,

            // Trivia
            RawTag::Whitespace => TokenKind::Whitespace,
            RawTag::Newline => TokenKind::Newline,
            RawTag::LineComment => TokenKind::LineComment,

            // Error tags
            RawTag::UnrecognizedChar => {
                self.push(LexError::unrecognized(span, text.chars().next()), context)
            }
            RawTag::MalformedDecimalInt => self.malformed(span, LiteralKind::DecimalInt, context),
            RawTag::MalformedHexInt => self.malformed(span, LiteralKind::HexInt, context),
            RawTag::MalformedOctalInt => self.malformed(span, LiteralKind::OctalInt, context),
            RawTag::MalformedBinaryInt => self.malformed(span, LiteralKind::BinaryInt, context),
            RawTag::MalformedDecimalFloat => {
                self.malformed(span, LiteralKind::DecimalFloat, context)
            }
            RawTag::MalformedHexFloat => self.malformed(span, LiteralKind::HexFloat, context),
            RawTag::MalformedString => self.malformed(span, LiteralKind::String, context),
            RawTag::MalformedXmlReference => {
                self.malformed(span, LiteralKind::XmlReference, context)
            }
            RawTag::MalformedBlob => self.malformed(span, LiteralKind::Blob, context),
            RawTag::UnterminatedString => {
                self.unterminated(span, LiteralKind::String, context)
            }
            RawTag::UnterminatedQuotedIdent => {
                self.unterminated(span, LiteralKind::QuotedIdent, context)
            }
            RawTag::UnterminatedBlob => self.unterminated(span, LiteralKind::Blob, context),
            RawTag::StrayCloser => self.push(LexError::stray_closer(span, text), context),
            RawTag::MissingCloser => self.push(LexError::missing_closer(span), context),
            RawTag::UnclosedCodeSpan => self.push(LexError::unclosed_code_span(span), context),
            RawTag::NestingTooDeep => {
                self.push(LexError::nesting_too_deep(span, self.max_depth), context)
            }
            // The driver routes this through `cook_unterminated_template`,
            // which needs the unclosed frame.
            RawTag::UnterminatedTemplate => {
                debug_assert!(
                    false,
                    "UnterminatedTemplate should be cooked by cook_unterminated_template()"
                );
                TokenKind::Error(LexErrorKind::UnterminatedTemplate)
            }

            RawTag::Eof => TokenKind::Eof,
        }
    }

    /// Cook the zero-length `UnterminatedTemplate` token at `eof`.
    ///
    /// The diagnostic spans from the outermost unclosed opener to EOF.
    pub(crate) fn cook_unterminated_template(
        &mut self,
        unclosed: Option<Frame>,
        eof: u32,
        context: LexErrorContext,
    ) -> TokenKind {
        self.contextual_kw = false;
        let (open, closer) = match unclosed {
            Some(frame) => (frame.open, closing_delimiter(frame.mode)),
            None => (eof, "`"),
        };
        self.push(
            LexError::unterminated_template(Span::new(open, eof), closer),
            context,
        )
    }

    fn cook_ident(&mut self, text: &str) -> TokenKind {
        if let Some(kind) = self.query.resolve(text) {
            self.contextual_kw = kind.is_contextual_keyword();
            return kind;
        }
        keywords::lookup(text).unwrap_or(TokenKind::Ident)
    }

    fn malformed(&mut self, span: Span, literal: LiteralKind, context: LexErrorContext) -> TokenKind {
        self.push(LexError::malformed_literal(span, literal), context)
    }

    fn unterminated(
        &mut self,
        span: Span,
        literal: LiteralKind,
        context: LexErrorContext,
    ) -> TokenKind {
        self.push(LexError::unterminated_literal(span, literal), context)
    }

    #[cold]
    fn push(&mut self, error: LexError, context: LexErrorContext) -> TokenKind {
        let kind = error.kind;
        tracing::debug!(%kind, span = %error.span, ?context, "lex error");
        self.errors.push(error.with_context(context));
        TokenKind::Error(kind)
    }
}

/// The delimiter that closes a frame of `mode`.
fn closing_delimiter(mode: Mode) -> &'static str {
    match mode {
        Mode::Default => "",
        Mode::Xml | Mode::StringTemplate | Mode::SingleBacktickCode => "`",
        Mode::XmlTag => ">",
        Mode::DoubleQuotedXmlString => "\"",
        Mode::SingleQuotedXmlString => "'",
        Mode::XmlPi => "?>",
        Mode::XmlComment => "-->",
        Mode::DeprecatedTemplate | Mode::Expression { .. } => "}",
        Mode::DocTemplate | Mode::DocParam => "\n",
        Mode::TripleBacktickCode => "```",
        Mode::DoubleBacktickCode => "``",
    }
}

#[cfg(test)]
mod tests;
