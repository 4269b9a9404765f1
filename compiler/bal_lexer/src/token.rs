//! Token, span and position types.
//!
//! `TokenKind` is the contract with the parser: grammar rules key off the
//! variant, so every delimiter, keyword and literal category has its own.
//! Keywords and identifiers keep their spelling in [`Token::text`].

use std::fmt;
use std::ops::Range;

use crate::keywords;
use crate::lex_error::LexErrorKind;

/// Byte range in the source. `end` is exclusive.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder for tokens built outside a lexer run.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column. Columns count Unicode scalar values.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    pub const START: LineCol = LineCol { line: 1, col: 1 };

    pub const fn new(line: u32, col: u32) -> Self {
        LineCol { line, col }
    }
}

impl Default for LineCol {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// One lexeme with its kind, exact source text and position.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// The source slice consumed. Concatenating every token's text
    /// reproduces the input.
    pub text: &'src str,
    pub span: Span,
    pub start: LineCol,
    pub end: LineCol,
}

impl Token<'_> {
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// What a [`TokenKind::DefinitionReference`] points at: `Type` for
    /// ``type `T` ``, `Module` for ``module `m` `` and so on.
    ///
    /// `None` for every other kind of token.
    pub fn reference_kind(&self) -> Option<TokenKind> {
        if self.kind != TokenKind::DefinitionReference {
            return None;
        }
        keywords::reference_kind(self.text.trim_end_matches([' ', '\t']))
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {} ({})", self.kind, self.text, self.span, self.start)
    }
}

/// Token kinds.
///
/// Template text kinds carry raw text: escapes are kept verbatim and
/// interpreted by later phases.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // === Identifiers & Literals ===
    Ident,
    /// `` `any text` `` used as an identifier.
    QuotedIdent,
    DecimalInt,
    HexInt,
    OctalInt,
    BinaryInt,
    DecimalFloat,
    HexFloat,
    String,
    /// `'name`
    SymbolicString,
    Base16Blob,
    Base64Blob,
    True,
    False,
    Null,

    // === Reserved Keywords ===
    Import,
    As,
    Public,
    Private,
    Extern,
    Service,
    Resource,
    Function,
    Object,
    Record,
    Annotation,
    Parameter,
    Transformer,
    Worker,
    Endpoint,
    Bind,
    Xmlns,
    Returns,
    Version,
    Deprecated,
    Channel,
    Abstract,
    From,
    On,
    Group,
    By,
    Having,
    Order,
    Where,
    Followed,
    For,
    Window,
    Query,
    Expired,
    Current,
    Every,
    Within,
    Snapshot,
    Inner,
    Outer,
    Right,
    Left,
    Full,
    Unidirectional,
    Reduce,
    Forever,
    Limit,
    Ascending,
    Descending,

    // Type keywords
    IntType,
    ByteType,
    FloatType,
    BooleanType,
    StringType,
    ErrorType,
    MapType,
    JsonType,
    XmlType,
    TableType,
    StreamType,
    AnyType,
    TypedescType,
    Type,
    FutureType,
    Var,
    New,

    // Statement keywords
    If,
    Match,
    Else,
    Foreach,
    While,
    Continue,
    Break,
    Fork,
    Join,
    Some,
    All,
    Timeout,
    Try,
    Catch,
    Finally,
    Throw,
    Panic,
    Trap,
    Return,
    Transaction,
    Abort,
    Retry,
    OnRetry,
    Retries,
    OnAbort,
    OnCommit,
    LengthOf,
    With,
    In,
    Lock,
    Untaint,
    Start,
    Await,
    But,
    Check,
    Done,
    Scope,
    Compensation,
    Compensate,
    PrimaryKey,

    // === Contextual Query Keywords ===
    Select,
    Insert,
    Into,
    Update,
    Delete,
    Set,
    Events,
    Last,
    First,
    Output,
    /// `second` or `seconds`.
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,

    // === Documentation Reference Kinds ===
    /// Reserved only as the kind word of a documentation reference.
    Variable,
    Module,

    // === Template Delimiters ===
    /// `` xml` ``; whitespace before the backtick is part of the lexeme.
    XmlLiteralStart,
    XmlLiteralEnd,
    StringTemplateStart,
    StringTemplateEnd,
    DeprecatedTemplateStart,
    DeprecatedTemplateEnd,
    /// `${`
    ExpressionStart,
    /// `}` closing an interpolation.
    ExpressionEnd,
    TripleBacktickStart,
    TripleBacktickEnd,
    DoubleBacktickStart,
    DoubleBacktickEnd,
    SingleBacktickStart,
    SingleBacktickEnd,

    // === Documentation Delimiters ===
    /// `#` and at most one space.
    DocumentationLineStart,
    /// `# +` and the spaces around the `+`.
    ParameterDocumentationStart,
    /// `# + return -` and the spaces around it.
    ReturnParameterDocumentationStart,
    /// ` - ` after a documented parameter's name.
    DescriptionSeparator,
    /// Newline ending a documentation line.
    DocumentationEnd,
    /// Newline ending a parameter line that has no description.
    DocumentationParamEnd,

    // === Template Text ===
    XmlText,
    XmlPiText,
    XmlCommentText,
    XmlDoubleQuotedText,
    XmlSingleQuotedText,
    StringTemplateText,
    DocumentationText,
    /// `type`, `function` and the other reference kinds, with the spaces
    /// before the backticked name. See [`Token::reference_kind`].
    DefinitionReference,
    ParameterName,
    DeprecatedTemplateText,
    TripleBacktickContent,
    DoubleBacktickContent,
    SingleBacktickContent,

    // === XML Markup ===
    XmlTagOpen,
    XmlTagOpenSlash,
    XmlTagSpecialOpen,
    XmlTagClose,
    XmlTagSlashClose,
    XmlTagSpecialClose,
    XmlCommentStart,
    XmlCommentEnd,
    XmlQName,
    XmlQNameSeparator,
    XmlEquals,
    XmlSlash,
    XmlDoubleQuote,
    XmlDoubleQuoteEnd,
    XmlSingleQuote,
    XmlSingleQuoteEnd,
    XmlCdata,
    XmlDtd,
    XmlEntityRef,
    XmlCharRef,

    // === Operators & Punctuation ===
    Semicolon,
    Colon,
    DoubleColon,
    Dot,
    Comma,
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Question,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Bang,
    EqEq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    AmpAmp,
    PipePipe,
    Amp,
    Caret,
    Tilde,
    Arrow,
    LeftArrow,
    At,
    DotDot,
    DotDotDot,
    DotDotLt,
    Pipe,
    FatArrow,
    /// `?:`
    Elvis,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    /// `>>>=`
    UshrEq,

    // === Trivia ===
    Whitespace,
    Newline,
    LineComment,

    // === Control ===
    Error(LexErrorKind),
    Eof,
}

impl TokenKind {
    /// Whitespace, newlines and comments. The newline ending a
    /// documentation line counts as trivia too.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace
                | Self::Newline
                | Self::LineComment
                | Self::DocumentationEnd
                | Self::DocumentationParamEnd
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        self.keyword_str().is_some()
    }

    /// Contextual query keywords: plain identifiers unless their guarding
    /// query flag was set when they were scanned.
    pub fn is_contextual_keyword(self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::Insert
                | Self::Into
                | Self::Update
                | Self::Delete
                | Self::Set
                | Self::Events
                | Self::Last
                | Self::First
                | Self::Output
                | Self::Second
                | Self::Minute
                | Self::Hour
                | Self::Day
                | Self::Month
                | Self::Year
        )
    }

    /// The spelling of a keyword kind.
    ///
    /// Time-unit keywords accept a plural spelling too; this returns the
    /// singular one.
    pub fn keyword_str(self) -> Option<&'static str> {
        let text = match self {
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",

            Self::Import => "import",
            Self::As => "as",
            Self::Public => "public",
            Self::Private => "private",
            Self::Extern => "extern",
            Self::Service => "service",
            Self::Resource => "resource",
            Self::Function => "function",
            Self::Object => "object",
            Self::Record => "record",
            Self::Annotation => "annotation",
            Self::Parameter => "parameter",
            Self::Transformer => "transformer",
            Self::Worker => "worker",
            Self::Endpoint => "endpoint",
            Self::Bind => "bind",
            Self::Xmlns => "xmlns",
            Self::Returns => "returns",
            Self::Version => "version",
            Self::Deprecated => "deprecated",
            Self::Channel => "channel",
            Self::Abstract => "abstract",
            Self::From => "from",
            Self::On => "on",
            Self::Group => "group",
            Self::By => "by",
            Self::Having => "having",
            Self::Order => "order",
            Self::Where => "where",
            Self::Followed => "followed",
            Self::For => "for",
            Self::Window => "window",
            Self::Query => "query",
            Self::Expired => "expired",
            Self::Current => "current",
            Self::Every => "every",
            Self::Within => "within",
            Self::Snapshot => "snapshot",
            Self::Inner => "inner",
            Self::Outer => "outer",
            Self::Right => "right",
            Self::Left => "left",
            Self::Full => "full",
            Self::Unidirectional => "unidirectional",
            Self::Reduce => "reduce",
            Self::Forever => "forever",
            Self::Limit => "limit",
            Self::Ascending => "ascending",
            Self::Descending => "descending",

            Self::IntType => "int",
            Self::ByteType => "byte",
            Self::FloatType => "float",
            Self::BooleanType => "boolean",
            Self::StringType => "string",
            Self::ErrorType => "error",
            Self::MapType => "map",
            Self::JsonType => "json",
            Self::XmlType => "xml",
            Self::TableType => "table",
            Self::StreamType => "stream",
            Self::AnyType => "any",
            Self::TypedescType => "typedesc",
            Self::Type => "type",
            Self::FutureType => "future",
            Self::Var => "var",
            Self::New => "new",

            Self::If => "if",
            Self::Match => "match",
            Self::Else => "else",
            Self::Foreach => "foreach",
            Self::While => "while",
            Self::Continue => "continue",
            Self::Break => "break",
            Self::Fork => "fork",
            Self::Join => "join",
            Self::Some => "some",
            Self::All => "all",
            Self::Timeout => "timeout",
            Self::Try => "try",
            Self::Catch => "catch",
            Self::Finally => "finally",
            Self::Throw => "throw",
            Self::Panic => "panic",
            Self::Trap => "trap",
            Self::Return => "return",
            Self::Transaction => "transaction",
            Self::Abort => "abort",
            Self::Retry => "retry",
            Self::OnRetry => "onretry",
            Self::Retries => "retries",
            Self::OnAbort => "onabort",
            Self::OnCommit => "oncommit",
            Self::LengthOf => "lengthof",
            Self::With => "with",
            Self::In => "in",
            Self::Lock => "lock",
            Self::Untaint => "untaint",
            Self::Start => "start",
            Self::Await => "await",
            Self::But => "but",
            Self::Check => "check",
            Self::Done => "done",
            Self::Scope => "scope",
            Self::Compensation => "compensation",
            Self::Compensate => "compensate",
            Self::PrimaryKey => "primarykey",

            Self::Select => "select",
            Self::Insert => "insert",
            Self::Into => "into",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Set => "set",
            Self::Events => "events",
            Self::Last => "last",
            Self::First => "first",
            Self::Output => "output",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",

            Self::Variable => "variable",
            Self::Module => "module",

            _ => return None,
        };
        Some(text)
    }

    /// The source text of kinds that are always spelled the same way.
    ///
    /// Template openers may carry whitespace (`xml  \``), so they have none.
    pub fn fixed_lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::XmlLiteralEnd
            | Self::StringTemplateEnd
            | Self::SingleBacktickStart
            | Self::SingleBacktickEnd => "`",
            Self::DeprecatedTemplateEnd | Self::ExpressionEnd | Self::RBrace => "}",
            Self::ExpressionStart => "${",
            Self::TripleBacktickStart | Self::TripleBacktickEnd => "```",
            Self::DoubleBacktickStart | Self::DoubleBacktickEnd => "``",

            Self::XmlTagOpen | Self::Lt => "<",
            Self::XmlTagOpenSlash => "</",
            Self::XmlTagSpecialOpen => "<?",
            Self::XmlTagClose | Self::Gt => ">",
            Self::XmlTagSlashClose => "/>",
            Self::XmlTagSpecialClose => "?>",
            Self::XmlCommentStart => "<!--",
            Self::XmlCommentEnd => "-->",
            Self::XmlQNameSeparator | Self::Colon => ":",
            Self::XmlEquals | Self::Eq => "=",
            Self::XmlSlash | Self::Slash => "/",
            Self::XmlDoubleQuote | Self::XmlDoubleQuoteEnd => "\"",
            Self::XmlSingleQuote | Self::XmlSingleQuoteEnd => "'",

            Self::Semicolon => ";",
            Self::DoubleColon => "::",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::LBrace => "{",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Question => "?",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Percent => "%",
            Self::Bang => "!",
            Self::EqEq => "==",
            Self::NotEq => "!=",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Amp => "&",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::Arrow => "->",
            Self::LeftArrow => "<-",
            Self::At => "@",
            Self::DotDot => "..",
            Self::DotDotDot => "...",
            Self::DotDotLt => "..<",
            Self::Pipe => "|",
            Self::FatArrow => "=>",
            Self::Elvis => "?:",
            Self::PlusEq => "+=",
            Self::MinusEq => "-=",
            Self::StarEq => "*=",
            Self::SlashEq => "/=",
            Self::AmpEq => "&=",
            Self::PipeEq => "|=",
            Self::CaretEq => "^=",
            Self::ShlEq => "<<=",
            Self::ShrEq => ">>=",
            Self::UshrEq => ">>>=",

            Self::Eof => "",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable name for diagnostics ("expected X, found Y").
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::QuotedIdent => "quoted identifier",
            Self::DecimalInt => "integer",
            Self::HexInt => "hexadecimal integer",
            Self::OctalInt => "octal integer",
            Self::BinaryInt => "binary integer",
            Self::DecimalFloat => "float",
            Self::HexFloat => "hexadecimal float",
            Self::String => "string",
            Self::SymbolicString => "symbolic string",
            Self::Base16Blob => "base16 blob",
            Self::Base64Blob => "base64 blob",

            Self::XmlLiteralStart => "xml`",
            Self::StringTemplateStart => "string`",
            Self::DeprecatedTemplateStart => "deprecated {",
            Self::DocumentationLineStart => "documentation line",
            Self::ParameterDocumentationStart => "parameter documentation",
            Self::ReturnParameterDocumentationStart => "return value documentation",
            Self::DescriptionSeparator => "description separator",
            Self::DocumentationEnd | Self::DocumentationParamEnd => "end of documentation line",

            Self::XmlText => "XML text",
            Self::XmlPiText => "processing instruction text",
            Self::XmlCommentText => "XML comment text",
            Self::XmlDoubleQuotedText | Self::XmlSingleQuotedText => "attribute value",
            Self::StringTemplateText => "template text",
            Self::DocumentationText => "documentation text",
            Self::DefinitionReference => "definition reference",
            Self::ParameterName => "parameter name",
            Self::DeprecatedTemplateText => "deprecation text",
            Self::TripleBacktickContent
            | Self::DoubleBacktickContent
            | Self::SingleBacktickContent => "inline code",
            Self::XmlQName => "XML name",
            Self::XmlCdata => "CDATA section",
            Self::XmlDtd => "DTD",
            Self::XmlEntityRef => "entity reference",
            Self::XmlCharRef => "character reference",

            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "comment",
            Self::Error(_) => "error",
            Self::Eof => "end of file",

            kind => kind
                .keyword_str()
                .or_else(|| kind.fixed_lexeme())
                .unwrap_or("token"),
        }
    }
}
