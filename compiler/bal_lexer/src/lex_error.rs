//! Lexical errors.
//!
//! A [`LexError`] answers WHERE (`span`), WHAT (`kind`), WHY (`context`,
//! the template being scanned) and HOW (`suggestions`). Only the kind
//! travels in the token stream; the full error is kept by the lexer.

use thiserror::Error;

use crate::token::Span;

/// One lexical error, ready for rendering.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
    /// WHY we were scanning there.
    pub context: LexErrorContext,
    /// HOW to fix.
    pub suggestions: Vec<LexSuggestion>,
}

/// Error category, carried by `TokenKind::Error`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// No token starts with this character. One character is skipped.
    #[error("unrecognized character")]
    UnrecognizedCharacter,
    /// A prefix committed to a literal kind but the body is invalid.
    #[error("malformed {0}")]
    MalformedLiteral(LiteralKind),
    /// A literal ran into a newline or EOF before its closing delimiter.
    #[error("unterminated {0}")]
    UnterminatedLiteral(LiteralKind),
    #[error(transparent)]
    MalformedStructure(#[from] StructureError),
    /// EOF with template frames still open.
    #[error("unterminated template")]
    UnterminatedTemplate,
}

/// Literal categories named by literal errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LiteralKind {
    DecimalInt,
    HexInt,
    OctalInt,
    BinaryInt,
    DecimalFloat,
    HexFloat,
    String,
    QuotedIdent,
    XmlReference,
    Blob,
}

impl LiteralKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::DecimalInt => "integer literal",
            Self::HexInt => "hexadecimal integer literal",
            Self::OctalInt => "octal integer literal",
            Self::BinaryInt => "binary integer literal",
            Self::DecimalFloat => "floating-point literal",
            Self::HexFloat => "hexadecimal floating-point literal",
            Self::String => "string literal",
            Self::QuotedIdent => "quoted identifier",
            Self::XmlReference => "XML reference",
            Self::Blob => "blob literal",
        }
    }
}

impl std::fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mode-stack imbalance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum StructureError {
    /// `]]>`, `-->` or `?>` in XML content with no matching opener.
    #[error("closing delimiter without a matching opener")]
    StrayCloser,
    /// An XML literal ended inside a tag, attribute, comment, processing
    /// instruction, CDATA section or DTD.
    #[error("XML literal ended before an inner construct was closed")]
    MissingCloser,
    #[error("templates nested too deeply")]
    NestingTooDeep,
}

/// Lexing context at the point of error, the WHY.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LexErrorContext {
    /// Not inside any template.
    #[default]
    TopLevel,
    /// Inside a template opened at `start`, with `nesting` frames above
    /// the `DEFAULT` floor.
    InsideTemplate { start: u32, nesting: u32 },
}

/// Suggestion for fixing a lexical error, the HOW.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexSuggestion {
    pub message: String,
    /// Machine-applicable edit, when there is an obvious one.
    pub replacement: Option<LexReplacement>,
    /// Ranking among suggestions for the same error; 0 first.
    pub priority: u8,
}

/// Replace `span` with `text`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexReplacement {
    pub span: Span,
    pub text: String,
}

impl LexSuggestion {
    /// Advice without an edit.
    pub fn text(message: impl Into<String>, priority: u8) -> Self {
        Self {
            message: message.into(),
            replacement: None,
            priority,
        }
    }

    /// Delete `span`.
    pub fn removal(message: impl Into<String>, span: Span) -> Self {
        Self::replace(message, span, String::new())
    }

    pub fn replace(message: impl Into<String>, span: Span, text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacement: Some(LexReplacement {
                span,
                text: text.into(),
            }),
            priority: 0,
        }
    }
}

impl LexError {
    fn new(span: Span, kind: LexErrorKind) -> Self {
        Self {
            span,
            kind,
            context: LexErrorContext::TopLevel,
            suggestions: Vec::new(),
        }
    }

    /// Create an unrecognized character error.
    ///
    /// `found` is the offending character, when the span holds one.
    #[cold]
    pub fn unrecognized(span: Span, found: Option<char>) -> Self {
        let err = Self::new(span, LexErrorKind::UnrecognizedCharacter);
        match found {
            Some('$') => err.with_suggestion(LexSuggestion::text(
                "`${` starts an interpolation only inside a string or XML template",
                0,
            )),
            Some('\'') => err.with_suggestion(LexSuggestion::text(
                "a symbolic string is `'` followed by an identifier; use `\"` for strings",
                0,
            )),
            Some('\0') => err.with_suggestion(LexSuggestion::removal("remove the null byte", span)),
            _ => err.with_suggestion(LexSuggestion::removal("remove this character", span)),
        }
    }

    /// A literal whose prefix committed but whose body is invalid.
    #[cold]
    pub fn malformed_literal(span: Span, literal: LiteralKind) -> Self {
        let hint = match literal {
            LiteralKind::HexInt | LiteralKind::OctalInt | LiteralKind::BinaryInt => {
                "write at least one digit after the base prefix; `_` may only separate digits"
            }
            LiteralKind::DecimalInt => "`_` may only separate digits",
            LiteralKind::DecimalFloat => "an exponent needs at least one digit, e.g. `1.5e3`",
            LiteralKind::HexFloat => "a binary exponent needs at least one digit, e.g. `0x1.8p3`",
            LiteralKind::String | LiteralKind::QuotedIdent => {
                r#"valid escapes are \b \t \n \f \r \' \" \\, octal \0-\377 and \uXXXX"#
            }
            LiteralKind::XmlReference => {
                "write `&name;`, `&#123;` or `&#x7B;`, or escape a literal `&` as `&amp;`"
            }
            LiteralKind::Blob => {
                "base16 blobs hold pairs of hex digits; base64 blobs hold groups of four characters"
            }
        };
        Self::new(span, LexErrorKind::MalformedLiteral(literal))
            .with_suggestion(LexSuggestion::text(hint, 0))
    }

    /// Create an unterminated literal error.
    #[cold]
    pub fn unterminated_literal(span: Span, literal: LiteralKind) -> Self {
        let closer = match literal {
            LiteralKind::String => "add closing `\"`",
            _ => "add closing `` ` ``",
        };
        Self::new(span, LexErrorKind::UnterminatedLiteral(literal))
            .with_suggestion(LexSuggestion::text(closer, 0))
    }

    /// `closer` is the delimiter text, e.g. `]]>`.
    #[cold]
    pub fn stray_closer(span: Span, closer: &str) -> Self {
        Self::new(span, StructureError::StrayCloser.into()).with_suggestion(
            LexSuggestion::removal(format!("remove the unmatched `{closer}`"), span),
        )
    }

    /// Reported at the backtick that ended the literal early.
    #[cold]
    pub fn missing_closer(span: Span) -> Self {
        Self::new(span, StructureError::MissingCloser.into()).with_suggestion(
            LexSuggestion::text(
                "close the open tag, attribute, comment or section before the closing backtick",
                0,
            ),
        )
    }

    /// A single or double backtick span still open where its
    /// documentation line ends.
    #[cold]
    pub fn unclosed_code_span(span: Span) -> Self {
        Self::new(span, StructureError::MissingCloser.into()).with_suggestion(
            LexSuggestion::text(
                "close the inline code before the line ends; use ``` for code spanning lines",
                0,
            ),
        )
    }

    /// An opener that would take the mode stack past `limit` frames.
    #[cold]
    pub fn nesting_too_deep(span: Span, limit: u32) -> Self {
        Self::new(span, StructureError::NestingTooDeep.into()).with_suggestion(
            LexSuggestion::text(
                format!("templates and interpolations may nest at most {limit} levels"),
                0,
            ),
        )
    }

    /// Create an unterminated template error spanning the opener to EOF.
    ///
    /// `closer` is the delimiter that would close the outermost template.
    #[cold]
    pub fn unterminated_template(span: Span, closer: &str) -> Self {
        Self::new(span, LexErrorKind::UnterminatedTemplate).with_suggestion(LexSuggestion::text(
            format!("add closing `{closer}` (and the closers of any inner templates)"),
            0,
        ))
    }

    /// Add a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: LexErrorContext) -> Self {
        self.context = context;
        self
    }
}
