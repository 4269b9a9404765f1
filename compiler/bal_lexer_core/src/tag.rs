//! Raw token tags produced by the modal scanner.
//!
//! A `RawTag` names the lexeme category only; keywords, literal values and
//! diagnostics are resolved by the cooking layer. Discriminants are grouped
//! into ranges so category checks compile to a single comparison:
//!
//! | Range     | Category                            |
//! |-----------|-------------------------------------|
//! | 0-15      | identifiers & literals              |
//! | 32-51     | template & documentation delimiters |
//! | 64-76     | template & documentation text       |
//! | 80-99     | XML markup                          |
//! | 112-161   | operators & punctuation             |
//! | 200-202   | trivia                              |
//! | 232-249   | errors                              |
//! | 255       | end of input                        |

/// Raw token category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals (0-15) ===
    Ident = 0,
    DecimalInt = 1,
    HexInt = 2,
    OctalInt = 3,
    BinaryInt = 4,
    DecimalFloat = 5,
    HexFloat = 6,
    String = 7,
    SymbolicString = 8,
    QuotedIdent = 9,
    Base16Blob = 10,
    Base64Blob = 11,

    // === Template Delimiters (32-51) ===
    /// `` xml` `` (whitespace allowed before the backtick).
    XmlLiteralStart = 32,
    /// `` ` `` closing an XML literal.
    XmlLiteralEnd = 33,
    /// `` string` ``.
    StringTemplateStart = 34,
    StringTemplateEnd = 35,
    /// `#` opening a documentation line, with one following space.
    DocumentationLineStart = 36,
    /// The newline ending a documentation line.
    DocumentationEnd = 37,
    /// `deprecated {`.
    DeprecatedTemplateStart = 38,
    DeprecatedTemplateEnd = 39,
    /// `${` opening an interpolation.
    ExpressionStart = 40,
    /// `}` closing an interpolation.
    ExpressionEnd = 41,
    /// `# + ` opening a parameter line.
    ParameterDocumentationStart = 42,
    /// `# + return - ` opening the return value's line.
    ReturnParameterDocumentationStart = 43,
    TripleBacktickStart = 44,
    TripleBacktickEnd = 45,
    DoubleBacktickStart = 46,
    DoubleBacktickEnd = 47,
    SingleBacktickStart = 48,
    SingleBacktickEnd = 49,
    /// ` - ` between a documented parameter's name and its description.
    DescriptionSeparator = 50,
    /// The newline ending a parameter line before any description.
    DocumentationParamEnd = 51,

    // === Template Text (64-76) ===
    XmlText = 64,
    XmlPiText = 65,
    XmlCommentText = 66,
    XmlDoubleQuotedText = 67,
    XmlSingleQuotedText = 68,
    StringTemplateText = 69,
    DocumentationText = 70,
    DeprecatedTemplateText = 71,
    TripleBacktickContent = 72,
    DoubleBacktickContent = 73,
    SingleBacktickContent = 74,
    /// A reference kind such as `type` with its trailing spaces, before a
    /// backticked name in documentation.
    DefinitionReference = 75,
    /// The documented parameter in `# + name - ...`.
    ParameterName = 76,

    // === XML Markup (80-99) ===
    XmlTagOpen = 80,
    XmlTagOpenSlash = 81,
    XmlTagSpecialOpen = 82,
    XmlTagClose = 83,
    XmlTagSlashClose = 84,
    XmlTagSpecialClose = 85,
    XmlCommentStart = 86,
    XmlCommentEnd = 87,
    XmlQName = 88,
    XmlQNameSeparator = 89,
    XmlEquals = 90,
    XmlSlash = 91,
    XmlDoubleQuote = 92,
    XmlDoubleQuoteEnd = 93,
    XmlSingleQuote = 94,
    XmlSingleQuoteEnd = 95,
    Cdata = 96,
    Dtd = 97,
    EntityRef = 98,
    CharRef = 99,

    // === Operators & Punctuation (112-161) ===
    Semicolon = 112,
    Colon = 113,
    ColonColon = 114,
    Dot = 115,
    Comma = 116,
    LeftBrace = 117,
    RightBrace = 118,
    LeftParen = 119,
    RightParen = 120,
    LeftBracket = 121,
    RightBracket = 122,
    Question = 123,
    Assign = 125,
    Plus = 126,
    Minus = 127,
    Star = 128,
    Slash = 129,
    Percent = 130,
    Bang = 131,
    EqualEqual = 132,
    BangEqual = 133,
    Greater = 134,
    Less = 135,
    GreaterEqual = 136,
    LessEqual = 137,
    AmpersandAmpersand = 138,
    PipePipe = 139,
    Ampersand = 140,
    Caret = 141,
    Tilde = 142,
    RightArrow = 143,
    LeftArrow = 144,
    At = 145,
    DotDot = 146,
    DotDotDot = 147,
    DotDotLess = 148,
    Pipe = 149,
    FatArrow = 150,
    Elvis = 151,
    PlusEqual = 152,
    MinusEqual = 153,
    StarEqual = 154,
    SlashEqual = 155,
    AmpersandEqual = 156,
    PipeEqual = 157,
    CaretEqual = 158,
    ShlEqual = 159,
    ShrEqual = 160,
    UshrEqual = 161,

    // === Trivia (200-202) ===
    Whitespace = 200,
    Newline = 201,
    LineComment = 202,

    // === Errors (232-249) ===
    UnrecognizedChar = 232,
    MalformedDecimalInt = 233,
    MalformedHexInt = 234,
    MalformedOctalInt = 235,
    MalformedBinaryInt = 236,
    MalformedDecimalFloat = 237,
    MalformedHexFloat = 238,
    MalformedString = 239,
    MalformedXmlReference = 240,
    MalformedBlob = 241,
    UnterminatedString = 242,
    UnterminatedQuotedIdent = 243,
    UnterminatedBlob = 244,
    /// `]]>`, `-->` or `?>` in XML content with no opener.
    StrayCloser = 245,
    /// The XML literal ended while a tag, attribute, PI, comment, CDATA
    /// section or DTD was still open.
    MissingCloser = 246,
    /// A mode opener would exceed the configured nesting limit.
    NestingTooDeep = 247,
    /// A single or double backtick span in a documentation line reached
    /// the end of the line or of the input.
    UnclosedCodeSpan = 248,
    /// End of input with template frames still open. Always zero-length.
    UnterminatedTemplate = 249,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// The fixed source text of this tag, if every occurrence is spelled
    /// the same way.
    ///
    /// Openers that may carry whitespace (`xml  \``) and error tags have no
    /// fixed lexeme.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::XmlLiteralEnd
            | Self::StringTemplateEnd
            | Self::SingleBacktickStart
            | Self::SingleBacktickEnd => "`",
            Self::DeprecatedTemplateEnd | Self::ExpressionEnd => "}",
            Self::ExpressionStart => "${",
            Self::TripleBacktickStart | Self::TripleBacktickEnd => "```",
            Self::DoubleBacktickStart | Self::DoubleBacktickEnd => "``",

            Self::XmlTagOpen => "<",
            Self::XmlTagOpenSlash => "</",
            Self::XmlTagSpecialOpen => "<?",
            Self::XmlTagClose => ">",
            Self::XmlTagSlashClose => "/>",
            Self::XmlTagSpecialClose => "?>",
            Self::XmlCommentStart => "<!--",
            Self::XmlCommentEnd => "-->",
            Self::XmlQNameSeparator => ":",
            Self::XmlEquals => "=",
            Self::XmlSlash => "/",
            Self::XmlDoubleQuote | Self::XmlDoubleQuoteEnd => "\"",
            Self::XmlSingleQuote | Self::XmlSingleQuoteEnd => "'",

            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::ColonColon => "::",
            Self::Dot => ".",
            Self::Comma => ",",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Question => "?",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Bang => "!",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::AmpersandAmpersand => "&&",
            Self::PipePipe => "||",
            Self::Ampersand => "&",
            Self::Caret => "^",
            Self::Tilde => "~",
            Self::RightArrow => "->",
            Self::LeftArrow => "<-",
            Self::At => "@",
            Self::DotDot => "..",
            Self::DotDotDot => "...",
            Self::DotDotLess => "..<",
            Self::Pipe => "|",
            Self::FatArrow => "=>",
            Self::Elvis => "?:",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::AmpersandEqual => "&=",
            Self::PipeEqual => "|=",
            Self::CaretEqual => "^=",
            Self::ShlEqual => "<<=",
            Self::ShrEqual => ">>=",
            Self::UshrEqual => ">>>=",

            Self::Eof => "",
            _ => return None,
        };
        Some(text)
    }

    /// Whitespace, newlines and comments.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (Self::Whitespace as u8..=Self::LineComment as u8).contains(&(self as u8))
    }

    #[inline]
    pub fn is_error(self) -> bool {
        (Self::UnrecognizedChar as u8..=Self::UnterminatedTemplate as u8)
            .contains(&(self as u8))
    }

    /// Template and documentation delimiters that open, close or switch a
    /// mode frame.
    #[inline]
    pub fn is_template_delimiter(self) -> bool {
        (Self::XmlLiteralStart as u8..=Self::DocumentationParamEnd as u8).contains(&(self as u8))
    }
}

/// One scanned lexeme: its category and byte length.
///
/// The scanner tracks the offset; consumers accumulate lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
