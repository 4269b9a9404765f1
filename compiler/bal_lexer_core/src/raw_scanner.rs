//! Modal raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and a
//! [`ModeStack`]. The active mode picks the rule set for the next lexeme;
//! delimiter lexemes push or pop frames as a side effect of being scanned.
//! Keywords, query flags and diagnostics are left to the cooking layer.
//!
//! # Design
//!
//! Code modes (`DEFAULT` and interpolation frames) dispatch on the current
//! byte. Text modes first try their delimiters, then scan a text run with
//! `memchr` up to the next byte that might start a delimiter, checking each
//! candidate with [`RawScanner::at_delimiter`].
//!
//! Documentation is line-scoped: `#` pushes a frame that the next newline
//! pops, and single or double backtick spans inside it cannot cross that
//! newline.
//!
//! Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
//! Every call except the final ones at EOF consumes at least one byte.

use crate::char_class::{
    is_ident_continue_byte, is_identifier_continue, is_identifier_start, is_xml_name_char,
    is_xml_name_start_char,
};
use crate::cursor::Cursor;
use crate::literals::{self, BlobBase};
use crate::mode::{Frame, Mode, ModeStack, TemplateFlags, DEFAULT_MAX_DEPTH};
use crate::punct;
use crate::tag::{RawTag, RawToken};

/// Words that say what a backticked name in documentation refers to.
const REFERENCE_KINDS: [&str; 8] = [
    "type",
    "service",
    "variable",
    "var",
    "annotation",
    "module",
    "function",
    "parameter",
];

/// Modal scanner over one source unit.
///
/// Produces one token at a time. After the source is exhausted, a scanner
/// with open frames emits a single zero-length `UnterminatedTemplate`,
/// then `Eof` forever.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    modes: ModeStack,
    /// Outermost frame still open when EOF was reached.
    unclosed: Option<Frame>,
}

impl<'a> RawScanner<'a> {
    /// Create a scanner with the default nesting limit.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self::with_max_depth(cursor, DEFAULT_MAX_DEPTH)
    }

    /// Create a scanner whose mode stack holds at most `max_depth` frames,
    /// the `DEFAULT` floor included.
    pub fn with_max_depth(cursor: Cursor<'a>, max_depth: u32) -> Self {
        Self {
            cursor,
            modes: ModeStack::new(max_depth),
            unclosed: None,
        }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let tag = if self.cursor.is_eof() {
            self.eof()
        } else {
            match self.modes.current() {
                Mode::Default | Mode::Expression { .. } => self.code(start),
                Mode::Xml => self.xml(start),
                Mode::XmlTag => self.xml_tag(start),
                Mode::DoubleQuotedXmlString => self.xml_quoted(start, b'"'),
                Mode::SingleQuotedXmlString => self.xml_quoted(start, b'\''),
                Mode::XmlPi => self.xml_pi(start),
                Mode::XmlComment => self.xml_comment(start),
                Mode::StringTemplate => self.string_template(start),
                Mode::DocTemplate => self.doc_line(start),
                Mode::DocParam => self.doc_param(),
                Mode::DeprecatedTemplate => self.deprecated_template(start),
                Mode::TripleBacktickCode => {
                    self.inline_code(b"```", RawTag::TripleBacktickEnd, RawTag::TripleBacktickContent)
                }
                Mode::DoubleBacktickCode => {
                    self.inline_code(b"``", RawTag::DoubleBacktickEnd, RawTag::DoubleBacktickContent)
                }
                Mode::SingleBacktickCode => {
                    self.inline_code(b"`", RawTag::SingleBacktickEnd, RawTag::SingleBacktickContent)
                }
            }
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn modes(&self) -> &ModeStack {
        &self.modes
    }

    pub fn template_flags(&self) -> TemplateFlags {
        self.modes.flags()
    }

    /// Byte offset of the next unread byte.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Source text between two token boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    /// The frame reported by the last `UnterminatedTemplate`, once.
    pub fn take_unclosed(&mut self) -> Option<Frame> {
        self.unclosed.take()
    }

    // ─── EOF ────────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawTag {
        if self.in_doc_code_span() {
            self.modes.unwind_past(Mode::DocTemplate);
            return RawTag::UnclosedCodeSpan;
        }
        // The last line of the source may be documentation.
        if self.modes.current().is_documentation() {
            self.modes.pop();
        }
        match self.modes.outermost_open() {
            Some(frame) => {
                self.unclosed = Some(frame);
                self.modes.reset();
                RawTag::UnterminatedTemplate
            }
            None => RawTag::Eof,
        }
    }

    // ─── Mode stack ─────────────────────────────────────────────────────

    /// Push `mode` and return `tag`, or `NestingTooDeep` at the limit.
    fn enter(&mut self, mode: Mode, open: u32, tag: RawTag) -> RawTag {
        if self.modes.push(mode, open) {
            tag
        } else {
            RawTag::NestingTooDeep
        }
    }

    fn leave(&mut self, tag: RawTag) -> RawTag {
        self.modes.pop();
        tag
    }

    /// `${` where interpolation is allowed.
    fn at_interpolation(&self) -> bool {
        self.modes.flags().contains(TemplateFlags::IN_TEMPLATE) && self.cursor.starts_with(b"${")
    }

    fn interpolation(&mut self, start: u32) -> RawTag {
        self.cursor.advance_n(2);
        self.enter(Mode::Expression { depth: 0 }, start, RawTag::ExpressionStart)
    }

    /// A backtick while an XML construct is still open ends the literal.
    fn missing_closer(&mut self) -> RawTag {
        self.cursor.advance();
        self.modes.unwind_past(Mode::Xml);
        RawTag::MissingCloser
    }

    // ─── Whitespace & Newlines ──────────────────────────────────────────

    fn whitespace(&mut self) -> RawTag {
        self.cursor.eat_whitespace();
        RawTag::Whitespace
    }

    fn carriage_return(&mut self) -> RawTag {
        self.cursor.advance();
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
            RawTag::Newline
        } else {
            // Lone \r is horizontal whitespace.
            RawTag::Whitespace
        }
    }

    fn newline(&mut self) -> RawTag {
        self.cursor.advance();
        RawTag::Newline
    }

    fn unrecognized(&mut self) -> RawTag {
        self.cursor.advance_char();
        RawTag::UnrecognizedChar
    }

    // ─── Code ───────────────────────────────────────────────────────────

    fn code(&mut self, start: u32) -> RawTag {
        match self.cursor.current() {
            b' ' | b'\t' | 0x0C => self.whitespace(),
            b'\r' => self.carriage_return(),
            b'\n' => self.newline(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => literals::number(&mut self.cursor),
            b'.' if self.cursor.peek().is_ascii_digit() => literals::number(&mut self.cursor),
            b'"' => literals::string(&mut self.cursor),
            b'`' => literals::quoted_identifier(&mut self.cursor),
            b'\'' => match literals::symbolic_string(&mut self.cursor) {
                Some(tag) => tag,
                None => self.unrecognized(),
            },
            b'/' if self.cursor.peek() == b'/' => {
                self.cursor.eat_until_newline_or_eof();
                RawTag::LineComment
            }
            b'{' => self.left_brace(),
            b'}' => self.right_brace(),
            b'#' => self.documentation_start(start),
            0x80..=0xFF => match self.cursor.current_char() {
                Some(c) if is_identifier_start(c) => self.identifier(start),
                _ => self.unrecognized(),
            },
            _ => self.punct(),
        }
    }

    fn punct(&mut self) -> RawTag {
        match punct::scan(self.cursor.rest()) {
            Some((tag, len)) => {
                self.cursor.advance_n(len);
                tag
            }
            // `$`, `\`, control characters and interior NUL.
            None => self.unrecognized(),
        }
    }

    fn left_brace(&mut self) -> RawTag {
        self.cursor.advance();
        if let Mode::Expression { depth } = self.modes.current() {
            self.modes.set_current(Mode::Expression {
                depth: depth.saturating_add(1),
            });
        }
        RawTag::LeftBrace
    }

    fn right_brace(&mut self) -> RawTag {
        self.cursor.advance();
        match self.modes.current() {
            Mode::Expression { depth: 0 } => self.leave(RawTag::ExpressionEnd),
            Mode::Expression { depth } => {
                self.modes.set_current(Mode::Expression { depth: depth - 1 });
                RawTag::RightBrace
            }
            _ => RawTag::RightBrace,
        }
    }

    // ─── Identifiers & Openers ──────────────────────────────────────────

    /// Scan an identifier, then check whether it spells a template opener.
    fn identifier(&mut self, start: u32) -> RawTag {
        self.cursor.eat_chars_while(is_identifier_continue);
        let opener = match self.cursor.slice_from(start) {
            "xml" => self.template_opener(start, b'`', Mode::Xml, RawTag::XmlLiteralStart),
            "string" => self.template_opener(
                start,
                b'`',
                Mode::StringTemplate,
                RawTag::StringTemplateStart,
            ),
            "deprecated" => self.template_opener(
                start,
                b'{',
                Mode::DeprecatedTemplate,
                RawTag::DeprecatedTemplateStart,
            ),
            "base16" => self.blob_opener(BlobBase::Base16),
            "base64" => self.blob_opener(BlobBase::Base64),
            _ => None,
        };
        opener.unwrap_or(RawTag::Ident)
    }

    /// Look past whitespace for `trigger`. On a match the whitespace and
    /// trigger join the opener lexeme; otherwise the cursor is restored.
    fn eat_trigger(&mut self, trigger: u8) -> bool {
        let snapshot = self.cursor;
        self.cursor.eat_whitespace_and_newlines();
        if self.cursor.current() == trigger {
            self.cursor.advance();
            true
        } else {
            self.cursor = snapshot;
            false
        }
    }

    fn template_opener(&mut self, start: u32, trigger: u8, mode: Mode, tag: RawTag) -> Option<RawTag> {
        if self.eat_trigger(trigger) {
            Some(self.enter(mode, start, tag))
        } else {
            None
        }
    }

    /// A blob literal is scanned whole; it opens no frame.
    fn blob_opener(&mut self, base: BlobBase) -> Option<RawTag> {
        if self.eat_trigger(b'`') {
            Some(literals::blob(&mut self.cursor, base))
        } else {
            None
        }
    }

    // ─── Text runs ──────────────────────────────────────────────────────

    /// Bytes that may begin a delimiter in `mode`'s text.
    fn text_stops(mode: Mode) -> &'static [u8] {
        match mode {
            Mode::Xml => b"`<&$]-?",
            Mode::DoubleQuotedXmlString => b"\"`<$",
            Mode::SingleQuotedXmlString => b"'`<$",
            Mode::XmlPi => b"`?$",
            Mode::XmlComment => b"`-$",
            Mode::StringTemplate => b"`$\\",
            Mode::DeprecatedTemplate => b"`}",
            Mode::TripleBacktickCode => b"`",
            Mode::DoubleBacktickCode | Mode::SingleBacktickCode => b"`\n\r",
            Mode::Default
            | Mode::Expression { .. }
            | Mode::XmlTag
            | Mode::DocTemplate
            | Mode::DocParam => b"",
        }
    }

    /// `true` if a delimiter of the active text mode starts at the cursor.
    fn at_delimiter(&self) -> bool {
        let cursor = &self.cursor;
        let b = cursor.current();
        match self.modes.current() {
            Mode::Xml => {
                matches!(b, b'`' | b'<' | b'&')
                    || cursor.starts_with(b"]]>")
                    || cursor.starts_with(b"-->")
                    || cursor.starts_with(b"?>")
                    || self.at_interpolation()
            }
            Mode::DoubleQuotedXmlString => {
                matches!(b, b'"' | b'`' | b'<') || self.at_interpolation()
            }
            Mode::SingleQuotedXmlString => {
                matches!(b, b'\'' | b'`' | b'<') || self.at_interpolation()
            }
            Mode::XmlPi => b == b'`' || cursor.starts_with(b"?>") || self.at_interpolation(),
            Mode::XmlComment => {
                b == b'`' || cursor.starts_with(b"-->") || self.at_interpolation()
            }
            Mode::StringTemplate => b == b'`' || self.at_interpolation(),
            Mode::DocTemplate => {
                b == b'`' || self.at_line_end() || self.definition_reference_len().is_some()
            }
            Mode::DeprecatedTemplate => matches!(b, b'`' | b'}'),
            Mode::TripleBacktickCode => cursor.starts_with(b"```"),
            Mode::DoubleBacktickCode => cursor.starts_with(b"``") || self.at_span_line_end(),
            Mode::SingleBacktickCode => b == b'`' || self.at_span_line_end(),
            Mode::Default | Mode::Expression { .. } | Mode::XmlTag | Mode::DocParam => true,
        }
    }

    /// Scan a text run of the active mode; the cursor is not on a delimiter.
    ///
    /// Backslash escapes in string templates are kept verbatim, so an
    /// escaped delimiter stays text.
    fn text(&mut self, tag: RawTag) -> RawTag {
        let mode = self.modes.current();
        let stops = Self::text_stops(mode);
        let escapes = mode == Mode::StringTemplate;
        loop {
            if escapes && self.cursor.current() == b'\\' {
                self.cursor.advance();
                if !self.cursor.is_eof() {
                    self.cursor.advance_char();
                }
            } else {
                self.cursor.advance_char();
            }
            if self.cursor.skip_to_any(stops).is_none() || self.at_delimiter() {
                return tag;
            }
        }
    }

    // ─── XML content ────────────────────────────────────────────────────

    fn xml(&mut self, start: u32) -> RawTag {
        match self.cursor.current() {
            b'`' => {
                self.cursor.advance();
                self.leave(RawTag::XmlLiteralEnd)
            }
            b'<' => self.xml_markup(start),
            b'&' => literals::xml_reference(&mut self.cursor),
            _ if self.cursor.eat_if(b"]]>")
                || self.cursor.eat_if(b"-->")
                || self.cursor.eat_if(b"?>") =>
            {
                RawTag::StrayCloser
            }
            _ if self.at_interpolation() => self.interpolation(start),
            _ => self.text(RawTag::XmlText),
        }
    }

    /// Markup starting with `<` inside XML content.
    fn xml_markup(&mut self, start: u32) -> RawTag {
        if self.cursor.eat_if(b"<!--") {
            self.enter(Mode::XmlComment, start, RawTag::XmlCommentStart)
        } else if self.cursor.eat_if(b"<![CDATA[") {
            self.markup_section(b"]]>", RawTag::Cdata)
        } else if self.cursor.eat_if(b"<!") {
            self.markup_section(b">", RawTag::Dtd)
        } else if self.cursor.eat_if(b"</") {
            self.enter(Mode::XmlTag, start, RawTag::XmlTagOpenSlash)
        } else if self.cursor.eat_if(b"<?") {
            self.enter(Mode::XmlPi, start, RawTag::XmlTagSpecialOpen)
        } else {
            self.cursor.advance();
            self.enter(Mode::XmlTag, start, RawTag::XmlTagOpen)
        }
    }

    /// CDATA or DTD body up to and including `close`.
    ///
    /// A backtick or EOF first means the section was never closed; the
    /// backtick is left for the XML content rules to end the literal.
    fn markup_section(&mut self, close: &[u8], tag: RawTag) -> RawTag {
        let first = close[0];
        loop {
            match self.cursor.skip_to_any(&[first, b'`']) {
                Some(b'`') | None => return RawTag::MissingCloser,
                Some(_) if self.cursor.eat_if(close) => return tag,
                Some(_) => self.cursor.advance(),
            }
        }
    }

    // ─── XML tags ───────────────────────────────────────────────────────

    fn xml_tag(&mut self, start: u32) -> RawTag {
        match self.cursor.current() {
            b' ' | b'\t' | 0x0C => self.whitespace(),
            b'\r' => self.carriage_return(),
            b'\n' => self.newline(),
            b'>' => {
                self.cursor.advance();
                self.leave(RawTag::XmlTagClose)
            }
            _ if self.cursor.eat_if(b"/>") => self.leave(RawTag::XmlTagSlashClose),
            _ if self.cursor.eat_if(b"?>") => self.leave(RawTag::XmlTagSpecialClose),
            b'/' => {
                self.cursor.advance();
                RawTag::XmlSlash
            }
            b'=' => {
                self.cursor.advance();
                RawTag::XmlEquals
            }
            b':' => {
                self.cursor.advance();
                RawTag::XmlQNameSeparator
            }
            b'"' => {
                self.cursor.advance();
                self.enter(Mode::DoubleQuotedXmlString, start, RawTag::XmlDoubleQuote)
            }
            b'\'' => {
                self.cursor.advance();
                self.enter(Mode::SingleQuotedXmlString, start, RawTag::XmlSingleQuote)
            }
            b'`' => self.missing_closer(),
            _ if self.at_interpolation() => self.interpolation(start),
            _ => match self.cursor.current_char() {
                Some(c) if is_xml_name_start_char(c) => {
                    self.cursor.eat_chars_while(is_xml_name_char);
                    RawTag::XmlQName
                }
                _ => self.unrecognized(),
            },
        }
    }

    fn xml_quoted(&mut self, start: u32, quote: u8) -> RawTag {
        let (end, text) = if quote == b'"' {
            (RawTag::XmlDoubleQuoteEnd, RawTag::XmlDoubleQuotedText)
        } else {
            (RawTag::XmlSingleQuoteEnd, RawTag::XmlSingleQuotedText)
        };
        match self.cursor.current() {
            b if b == quote => {
                self.cursor.advance();
                self.leave(end)
            }
            b'`' => self.missing_closer(),
            b'<' => self.unrecognized(),
            _ if self.at_interpolation() => self.interpolation(start),
            _ => self.text(text),
        }
    }

    fn xml_pi(&mut self, start: u32) -> RawTag {
        if self.cursor.eat_if(b"?>") {
            return self.leave(RawTag::XmlTagSpecialClose);
        }
        match self.cursor.current() {
            b'`' => self.missing_closer(),
            _ if self.at_interpolation() => self.interpolation(start),
            _ => self.text(RawTag::XmlPiText),
        }
    }

    fn xml_comment(&mut self, start: u32) -> RawTag {
        if self.cursor.eat_if(b"-->") {
            return self.leave(RawTag::XmlCommentEnd);
        }
        match self.cursor.current() {
            b'`' => self.missing_closer(),
            _ if self.at_interpolation() => self.interpolation(start),
            _ => self.text(RawTag::XmlCommentText),
        }
    }

    // ─── String templates ───────────────────────────────────────────────

    fn string_template(&mut self, start: u32) -> RawTag {
        match self.cursor.current() {
            b'`' => {
                self.cursor.advance();
                self.leave(RawTag::StringTemplateEnd)
            }
            _ if self.at_interpolation() => self.interpolation(start),
            _ => self.text(RawTag::StringTemplateText),
        }
    }

    // ─── Documentation ──────────────────────────────────────────────────

    /// `#` opens a documentation line, `# +` a parameter line and
    /// `# + return -` the return value's line.
    ///
    /// A plain line start takes one space after the `#`; further
    /// indentation is documentation text.
    fn documentation_start(&mut self, start: u32) -> RawTag {
        self.cursor.advance();
        let after_hash = self.cursor;
        self.cursor.eat_whitespace();
        if !self.cursor.eat_if(b"+") {
            self.cursor = after_hash;
            if matches!(self.cursor.current(), b' ' | b'\t') {
                self.cursor.advance();
            }
            return self.enter(Mode::DocTemplate, start, RawTag::DocumentationLineStart);
        }
        self.cursor.eat_whitespace();
        let before_name = self.cursor;
        if self.cursor.eat_if(b"return") {
            self.cursor.eat_whitespace();
            if self.cursor.eat_if(b"-") {
                self.cursor.eat_whitespace();
                return self.enter(
                    Mode::DocTemplate,
                    start,
                    RawTag::ReturnParameterDocumentationStart,
                );
            }
            // `returnValue`, or `return` used as a plain parameter name.
            self.cursor = before_name;
        }
        self.enter(Mode::DocParam, start, RawTag::ParameterDocumentationStart)
    }

    /// `\n` or `\r\n`.
    fn at_line_end(&self) -> bool {
        self.cursor.current() == b'\n' || self.cursor.starts_with(b"\r\n")
    }

    fn eat_line_end(&mut self) {
        self.cursor.eat_if(b"\r");
        self.cursor.advance();
    }

    fn doc_line(&mut self, start: u32) -> RawTag {
        if self.at_line_end() {
            self.eat_line_end();
            return self.leave(RawTag::DocumentationEnd);
        }
        if self.cursor.current() == b'`' {
            return self.backtick_opener(start);
        }
        if let Some(len) = self.definition_reference_len() {
            self.cursor.advance_n(len);
            return RawTag::DefinitionReference;
        }
        self.doc_text()
    }

    /// Documentation text up to a backtick, a definition reference or the
    /// end of the line. `\x` escapes stay text.
    ///
    /// Walks byte by byte: a reference kind can start at any word.
    fn doc_text(&mut self) -> RawTag {
        loop {
            if self.cursor.current() == b'\\' {
                self.cursor.advance();
                if !self.cursor.is_eof() && !self.at_line_end() {
                    self.cursor.advance_char();
                }
            } else {
                self.cursor.advance_char();
            }
            if self.cursor.is_eof() || self.at_delimiter() {
                return RawTag::DocumentationText;
            }
        }
    }

    /// Length of a definition reference at the cursor: a reference kind
    /// starting a word, then spaces, then the backtick of the name.
    fn definition_reference_len(&self) -> Option<u32> {
        let prev = self.cursor.prev();
        if !prev.is_ascii() || is_ident_continue_byte(prev) {
            return None;
        }
        let rest = self.cursor.rest().as_bytes();
        REFERENCE_KINDS
            .iter()
            .find_map(|kind| {
                let after = rest.strip_prefix(kind.as_bytes())?;
                let spaces = after
                    .iter()
                    .take_while(|&&b| matches!(b, b' ' | b'\t'))
                    .count();
                (spaces > 0 && after.get(spaces) == Some(&b'`')).then_some(kind.len() + spaces)
            })
            .and_then(|len| u32::try_from(len).ok())
    }

    /// Parameter line: the name, then ` - ` switches to a documentation
    /// line for the description.
    fn doc_param(&mut self) -> RawTag {
        if self.at_line_end() {
            self.eat_line_end();
            return self.leave(RawTag::DocumentationParamEnd);
        }
        if self.eat_description_separator() {
            self.modes.set_current(Mode::DocTemplate);
            return RawTag::DescriptionSeparator;
        }
        match self.cursor.current() {
            b' ' | b'\t' | 0x0C => self.whitespace(),
            b'\r' => self.carriage_return(),
            _ => match self.cursor.current_char() {
                Some(c) if is_identifier_start(c) => {
                    self.cursor.eat_chars_while(is_identifier_continue);
                    RawTag::ParameterName
                }
                _ => self.unrecognized(),
            },
        }
    }

    fn eat_description_separator(&mut self) -> bool {
        let snapshot = self.cursor;
        self.cursor.eat_whitespace();
        if self.cursor.eat_if(b"-") {
            self.cursor.eat_whitespace();
            true
        } else {
            self.cursor = snapshot;
            false
        }
    }

    /// A code span opened inside a documentation line.
    fn in_doc_code_span(&self) -> bool {
        self.modes.current().is_code_span() && self.modes.parent() == Some(Mode::DocTemplate)
    }

    /// Line end inside a single or double backtick span of a
    /// documentation line. Triple backtick spans may cross lines.
    fn at_span_line_end(&self) -> bool {
        self.modes.current() != Mode::TripleBacktickCode
            && self.in_doc_code_span()
            && self.at_line_end()
    }

    // ─── Deprecation templates & inline code ────────────────────────────

    fn deprecated_template(&mut self, start: u32) -> RawTag {
        match self.cursor.current() {
            b'}' => {
                self.cursor.advance();
                self.leave(RawTag::DeprecatedTemplateEnd)
            }
            b'`' => self.backtick_opener(start),
            _ => self.text(RawTag::DeprecatedTemplateText),
        }
    }

    /// One, two or three backticks open an inline code span.
    fn backtick_opener(&mut self, start: u32) -> RawTag {
        if self.cursor.eat_if(b"```") {
            self.enter(Mode::TripleBacktickCode, start, RawTag::TripleBacktickStart)
        } else if self.cursor.eat_if(b"``") {
            self.enter(Mode::DoubleBacktickCode, start, RawTag::DoubleBacktickStart)
        } else {
            self.cursor.advance();
            self.enter(Mode::SingleBacktickCode, start, RawTag::SingleBacktickStart)
        }
    }

    fn inline_code(&mut self, fence: &[u8], end: RawTag, content: RawTag) -> RawTag {
        if self.cursor.eat_if(fence) {
            self.leave(end)
        } else if self.at_span_line_end() {
            self.eat_line_end();
            self.modes.unwind_past(Mode::DocTemplate);
            RawTag::UnclosedCodeSpan
        } else {
            self.text(content)
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Scan a whole source string, excluding the trailing `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
