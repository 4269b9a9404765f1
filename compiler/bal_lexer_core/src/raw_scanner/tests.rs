use pretty_assertions::assert_eq;

use super::*;
use crate::SourceBuffer;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    tokenize(source)
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and pair each tag with the text it covers.
fn scan_pairs(source: &str) -> Vec<(RawTag, &str)> {
    let mut offset = 0usize;
    scan(source)
        .into_iter()
        .map(|tok| {
            let end = offset + tok.len as usize;
            let text = &source[offset..end];
            offset = end;
            (tok.tag, text)
        })
        .collect()
}

/// Helper: run a scanner over `source` to EOF and return it.
fn drain(buf: &SourceBuffer) -> RawScanner<'_> {
    let mut scanner = RawScanner::new(buf.cursor());
    while scanner.next_token().tag != RawTag::Eof {}
    scanner
}

// ─── Stream invariants ─────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "int x = 42;\nstring s = \"hi\";",
        "xml`<a b=\"c\">${d}</a>`",
        "string `a ${b} c`",
        "# Adds `y` to type `T`\n# + a - first\r\nint x;",
        "deprecated { ```z``` }",
        "string `unterminated ${",
        "\"abc\n\"",
        "  \t\n  \r\n  \r",
        "base16 `aabb` base64 `AA==`",
    ];
    for source in sources {
        let total: usize = scan(source).iter().map(|t| t.len as usize).sum();
        assert_eq!(total, source.len(), "total token length mismatch for {source:?}");
    }
}

#[test]
fn every_token_has_positive_length_except_unterminated_template() {
    let sources = [
        "a + b",
        "xml`<a/>`",
        "string `${x}`",
        "string `open",
        "# open `span",
    ];
    for source in sources {
        for tok in scan(source) {
            assert!(
                tok.len > 0
                    || matches!(tok.tag, RawTag::UnterminatedTemplate | RawTag::UnclosedCodeSpan),
                "zero-length token {tok:?} in {source:?}"
            );
        }
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.cursor());
    for _ in 0..5 {
        let tok = scanner.next_token();
        assert_eq!(tok, RawToken { tag: RawTag::Eof, len: 0 });
    }
}

// ─── Code mode ─────────────────────────────────────────────────

#[test]
fn simple_declaration() {
    assert_eq!(
        scan_tags("int x = 42;"),
        vec![
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::Assign,
            RawTag::Whitespace,
            RawTag::DecimalInt,
            RawTag::Semicolon,
        ]
    );
}

#[test]
fn newlines_and_carriage_returns() {
    assert_eq!(
        scan_pairs("a\r\nb\rc\n"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::Newline, "\r\n"),
            (RawTag::Ident, "b"),
            (RawTag::Whitespace, "\r"),
            (RawTag::Ident, "c"),
            (RawTag::Newline, "\n"),
        ]
    );
}

#[test]
fn line_comment_excludes_newline() {
    assert_eq!(
        scan_pairs("x // note\ny"),
        vec![
            (RawTag::Ident, "x"),
            (RawTag::Whitespace, " "),
            (RawTag::LineComment, "// note"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "y"),
        ]
    );
}

#[test]
fn unrecognized_characters_skip_one_char() {
    assert_eq!(
        scan_pairs("$ \\ € '"),
        vec![
            (RawTag::UnrecognizedChar, "$"),
            (RawTag::Whitespace, " "),
            (RawTag::UnrecognizedChar, "\\"),
            (RawTag::Whitespace, " "),
            (RawTag::UnrecognizedChar, "€"),
            (RawTag::Whitespace, " "),
            (RawTag::UnrecognizedChar, "'"),
        ]
    );
}

#[test]
fn interior_null_in_code_is_unrecognized() {
    assert_eq!(
        scan_tags("a\0b"),
        vec![RawTag::Ident, RawTag::UnrecognizedChar, RawTag::Ident]
    );
}

#[test]
fn unicode_identifiers() {
    assert_eq!(scan_pairs("ñandú"), vec![(RawTag::Ident, "ñandú")]);
    assert_eq!(scan_pairs("'λ"), vec![(RawTag::SymbolicString, "'λ")]);
}

#[test]
fn trailing_underscore_starts_identifier() {
    assert_eq!(
        scan_pairs("1_"),
        vec![(RawTag::DecimalInt, "1"), (RawTag::Ident, "_")]
    );
}

#[test]
fn shift_runs_split_into_single_angles() {
    assert_eq!(
        scan_tags("a >> b >>>= c"),
        vec![
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::Greater,
            RawTag::Greater,
            RawTag::Whitespace,
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::UshrEqual,
            RawTag::Whitespace,
            RawTag::Ident,
        ]
    );
}

#[test]
fn quoted_identifier_and_strings() {
    assert_eq!(
        scan_pairs("`if` \"s\""),
        vec![
            (RawTag::QuotedIdent, "`if`"),
            (RawTag::Whitespace, " "),
            (RawTag::String, "\"s\""),
        ]
    );
}

#[test]
fn unterminated_string_leaves_newline() {
    assert_eq!(
        scan_pairs("\"abc\n"),
        vec![(RawTag::UnterminatedString, "\"abc"), (RawTag::Newline, "\n")]
    );
}

#[test]
fn braces_at_floor_are_plain() {
    assert_eq!(
        scan_tags("{}}"),
        vec![RawTag::LeftBrace, RawTag::RightBrace, RawTag::RightBrace]
    );
}

// ─── Openers ───────────────────────────────────────────────────

#[test]
fn opener_whitespace_joins_the_lexeme() {
    assert_eq!(
        scan_pairs("xml \n `x`"),
        vec![
            (RawTag::XmlLiteralStart, "xml \n `"),
            (RawTag::XmlText, "x"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
}

#[test]
fn bare_opener_words_are_identifiers() {
    assert_eq!(
        scan_tags("xml x; string; deprecated"),
        vec![
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::Ident,
            RawTag::Semicolon,
            RawTag::Whitespace,
            RawTag::Ident,
            RawTag::Semicolon,
            RawTag::Whitespace,
            RawTag::Ident,
        ]
    );
}

#[test]
fn blob_literals_are_single_tokens() {
    assert_eq!(
        scan_pairs("base16 `aa bb`;base64`AA==`"),
        vec![
            (RawTag::Base16Blob, "base16 `aa bb`"),
            (RawTag::Semicolon, ";"),
            (RawTag::Base64Blob, "base64`AA==`"),
        ]
    );
}

// ─── XML ───────────────────────────────────────────────────────

#[test]
fn xml_literal_with_interpolation() {
    let buf = SourceBuffer::new("xml`<a>${x}</a>`");
    let mut scanner = RawScanner::new(buf.cursor());
    let mut pairs = Vec::new();
    loop {
        let start = scanner.pos();
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        pairs.push((tok.tag, scanner.slice(start, scanner.pos())));
    }
    assert_eq!(
        pairs,
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::XmlTagOpen, "<"),
            (RawTag::XmlQName, "a"),
            (RawTag::XmlTagClose, ">"),
            (RawTag::ExpressionStart, "${"),
            (RawTag::Ident, "x"),
            (RawTag::ExpressionEnd, "}"),
            (RawTag::XmlTagOpenSlash, "</"),
            (RawTag::XmlQName, "a"),
            (RawTag::XmlTagClose, ">"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
    assert_eq!(scanner.mode(), Mode::Default);
    assert!(scanner.modes().is_floor());
}

#[test]
fn xml_attributes_and_qualified_names() {
    assert_eq!(
        scan_pairs("xml`<ns:a href=\"u${v}w\" b='c'/>`"),
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::XmlTagOpen, "<"),
            (RawTag::XmlQName, "ns"),
            (RawTag::XmlQNameSeparator, ":"),
            (RawTag::XmlQName, "a"),
            (RawTag::Whitespace, " "),
            (RawTag::XmlQName, "href"),
            (RawTag::XmlEquals, "="),
            (RawTag::XmlDoubleQuote, "\""),
            (RawTag::XmlDoubleQuotedText, "u"),
            (RawTag::ExpressionStart, "${"),
            (RawTag::Ident, "v"),
            (RawTag::ExpressionEnd, "}"),
            (RawTag::XmlDoubleQuotedText, "w"),
            (RawTag::XmlDoubleQuoteEnd, "\""),
            (RawTag::Whitespace, " "),
            (RawTag::XmlQName, "b"),
            (RawTag::XmlEquals, "="),
            (RawTag::XmlSingleQuote, "'"),
            (RawTag::XmlSingleQuotedText, "c"),
            (RawTag::XmlSingleQuoteEnd, "'"),
            (RawTag::XmlTagSlashClose, "/>"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
}

#[test]
fn xml_comments_pi_cdata_dtd_and_references() {
    assert_eq!(
        scan_pairs("xml`<!--c-->x<?pi d?>&amp;<![CDATA[<z>]]><!DOCTYPE a>`"),
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::XmlCommentStart, "<!--"),
            (RawTag::XmlCommentText, "c"),
            (RawTag::XmlCommentEnd, "-->"),
            (RawTag::XmlText, "x"),
            (RawTag::XmlTagSpecialOpen, "<?"),
            (RawTag::XmlPiText, "pi d"),
            (RawTag::XmlTagSpecialClose, "?>"),
            (RawTag::EntityRef, "&amp;"),
            (RawTag::Cdata, "<![CDATA[<z>]]>"),
            (RawTag::Dtd, "<!DOCTYPE a>"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
}

#[test]
fn xml_text_keeps_lone_delimiter_bytes() {
    assert_eq!(
        scan_pairs("xml`a-b?c]d$e`"),
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::XmlText, "a-b?c]d$e"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
}

#[test]
fn stray_closers_in_xml_content() {
    assert_eq!(
        scan_pairs("xml`a]]>b-->?>`"),
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::XmlText, "a"),
            (RawTag::StrayCloser, "]]>"),
            (RawTag::XmlText, "b"),
            (RawTag::StrayCloser, "-->"),
            (RawTag::StrayCloser, "?>"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
}

#[test]
fn malformed_reference_in_xml() {
    assert_eq!(
        scan_pairs("xml`a & b`"),
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::XmlText, "a "),
            (RawTag::MalformedXmlReference, "&"),
            (RawTag::XmlText, " b"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
}

#[test]
fn backtick_in_open_tag_is_missing_closer() {
    let buf = SourceBuffer::new("xml`<a `;");
    let mut scanner = RawScanner::new(buf.cursor());
    let tags: Vec<_> = scanner.by_ref().map(|t| t.tag).collect();
    assert_eq!(
        tags,
        vec![
            RawTag::XmlLiteralStart,
            RawTag::XmlTagOpen,
            RawTag::XmlQName,
            RawTag::Whitespace,
            RawTag::MissingCloser,
            RawTag::Semicolon,
        ]
    );
    assert!(scanner.modes().is_floor());
}

#[test]
fn backtick_in_attribute_is_missing_closer() {
    assert_eq!(
        scan_pairs("xml`<a b=\"c`x"),
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::XmlTagOpen, "<"),
            (RawTag::XmlQName, "a"),
            (RawTag::Whitespace, " "),
            (RawTag::XmlQName, "b"),
            (RawTag::XmlEquals, "="),
            (RawTag::XmlDoubleQuote, "\""),
            (RawTag::XmlDoubleQuotedText, "c"),
            (RawTag::MissingCloser, "`"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn unclosed_cdata_stops_before_backtick() {
    assert_eq!(
        scan_pairs("xml`<![CDATA[x`"),
        vec![
            (RawTag::XmlLiteralStart, "xml`"),
            (RawTag::MissingCloser, "<![CDATA[x"),
            (RawTag::XmlLiteralEnd, "`"),
        ]
    );
}

// ─── String templates ──────────────────────────────────────────

#[test]
fn string_template_with_escape_and_interpolation() {
    assert_eq!(
        scan_pairs("string `a ${b} \\` c`"),
        vec![
            (RawTag::StringTemplateStart, "string `"),
            (RawTag::StringTemplateText, "a "),
            (RawTag::ExpressionStart, "${"),
            (RawTag::Ident, "b"),
            (RawTag::ExpressionEnd, "}"),
            (RawTag::StringTemplateText, " \\` c"),
            (RawTag::StringTemplateEnd, "`"),
        ]
    );
}

#[test]
fn nested_braces_inside_interpolation() {
    assert_eq!(
        scan_tags("string `${ {a} }$x`"),
        vec![
            RawTag::StringTemplateStart,
            RawTag::ExpressionStart,
            RawTag::Whitespace,
            RawTag::LeftBrace,
            RawTag::Ident,
            RawTag::RightBrace,
            RawTag::Whitespace,
            RawTag::ExpressionEnd,
            RawTag::StringTemplateText,
            RawTag::StringTemplateEnd,
        ]
    );
}

#[test]
fn triple_nested_interpolation_returns_to_default() {
    let source = "string `${xml `<a b=\"${string `${c}`}\"/>`}`";
    assert_eq!(
        scan_tags(source),
        vec![
            RawTag::StringTemplateStart,
            RawTag::ExpressionStart,
            RawTag::XmlLiteralStart,
            RawTag::XmlTagOpen,
            RawTag::XmlQName,
            RawTag::Whitespace,
            RawTag::XmlQName,
            RawTag::XmlEquals,
            RawTag::XmlDoubleQuote,
            RawTag::ExpressionStart,
            RawTag::StringTemplateStart,
            RawTag::ExpressionStart,
            RawTag::Ident,
            RawTag::ExpressionEnd,
            RawTag::StringTemplateEnd,
            RawTag::ExpressionEnd,
            RawTag::XmlDoubleQuoteEnd,
            RawTag::XmlTagSlashClose,
            RawTag::XmlLiteralEnd,
            RawTag::ExpressionEnd,
            RawTag::StringTemplateEnd,
        ]
    );
    let buf = SourceBuffer::new(source);
    let scanner = drain(&buf);
    assert!(scanner.modes().is_floor());
    assert_eq!(scanner.template_flags(), TemplateFlags::empty());
}

#[test]
fn inner_template_close_keeps_outer_interpolation_alive() {
    let buf = SourceBuffer::new("xml`${string `x`}${y}`");
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tags = Vec::new();
    while let Some(tok) = scanner.next() {
        tags.push(tok.tag);
        if tok.tag == RawTag::StringTemplateEnd {
            assert!(scanner
                .template_flags()
                .contains(TemplateFlags::IN_TEMPLATE));
        }
    }
    assert_eq!(
        tags,
        vec![
            RawTag::XmlLiteralStart,
            RawTag::ExpressionStart,
            RawTag::StringTemplateStart,
            RawTag::StringTemplateText,
            RawTag::StringTemplateEnd,
            RawTag::ExpressionEnd,
            RawTag::ExpressionStart,
            RawTag::Ident,
            RawTag::ExpressionEnd,
            RawTag::XmlLiteralEnd,
        ]
    );
}

// ─── Documentation & deprecation ───────────────────────────────

#[test]
fn documentation_lines() {
    assert_eq!(
        scan_pairs("# Adds `a` to b\n# + a - first\n# + return - sum\nfunction"),
        vec![
            (RawTag::DocumentationLineStart, "# "),
            (RawTag::DocumentationText, "Adds "),
            (RawTag::SingleBacktickStart, "`"),
            (RawTag::SingleBacktickContent, "a"),
            (RawTag::SingleBacktickEnd, "`"),
            (RawTag::DocumentationText, " to b"),
            (RawTag::DocumentationEnd, "\n"),
            (RawTag::ParameterDocumentationStart, "# + "),
            (RawTag::ParameterName, "a"),
            (RawTag::DescriptionSeparator, " - "),
            (RawTag::DocumentationText, "first"),
            (RawTag::DocumentationEnd, "\n"),
            (RawTag::ReturnParameterDocumentationStart, "# + return - "),
            (RawTag::DocumentationText, "sum"),
            (RawTag::DocumentationEnd, "\n"),
            (RawTag::Ident, "function"),
        ]
    );
}

#[test]
fn hash_keeps_one_space_and_leaves_indentation_as_text() {
    assert_eq!(
        scan_pairs("#\n#   indented\r\n"),
        vec![
            (RawTag::DocumentationLineStart, "#"),
            (RawTag::DocumentationEnd, "\n"),
            (RawTag::DocumentationLineStart, "# "),
            (RawTag::DocumentationText, "  indented"),
            (RawTag::DocumentationEnd, "\r\n"),
        ]
    );
}

#[test]
fn definition_reference_needs_word_start_and_backtick() {
    assert_eq!(
        scan_pairs("# See type `T`, subtype `U` and service x\n"),
        vec![
            (RawTag::DocumentationLineStart, "# "),
            (RawTag::DocumentationText, "See "),
            (RawTag::DefinitionReference, "type "),
            (RawTag::SingleBacktickStart, "`"),
            (RawTag::SingleBacktickContent, "T"),
            (RawTag::SingleBacktickEnd, "`"),
            (RawTag::DocumentationText, ", subtype "),
            (RawTag::SingleBacktickStart, "`"),
            (RawTag::SingleBacktickContent, "U"),
            (RawTag::SingleBacktickEnd, "`"),
            (RawTag::DocumentationText, " and service x"),
            (RawTag::DocumentationEnd, "\n"),
        ]
    );
}

#[test]
fn every_reference_kind_is_recognized() {
    for kind in REFERENCE_KINDS {
        let source = format!("# {kind}\t`x`");
        assert_eq!(
            scan_pairs(&source)[1],
            (RawTag::DefinitionReference, &source[2..kind.len() + 3]),
            "{source:?}"
        );
    }
}

#[test]
fn parameter_line_without_description() {
    assert_eq!(
        scan_pairs("# + returnValue\n# + x y\n"),
        vec![
            (RawTag::ParameterDocumentationStart, "# + "),
            (RawTag::ParameterName, "returnValue"),
            (RawTag::DocumentationParamEnd, "\n"),
            (RawTag::ParameterDocumentationStart, "# + "),
            (RawTag::ParameterName, "x"),
            (RawTag::Whitespace, " "),
            (RawTag::ParameterName, "y"),
            (RawTag::DocumentationParamEnd, "\n"),
        ]
    );
}

#[test]
fn escapes_and_interpolation_are_documentation_text() {
    assert_eq!(
        scan_pairs("# a \\` ${b}\n"),
        vec![
            (RawTag::DocumentationLineStart, "# "),
            (RawTag::DocumentationText, "a \\` ${b}"),
            (RawTag::DocumentationEnd, "\n"),
        ]
    );
}

#[test]
fn code_span_cannot_cross_documentation_line() {
    assert_eq!(
        scan_pairs("# a `b\nc"),
        vec![
            (RawTag::DocumentationLineStart, "# "),
            (RawTag::DocumentationText, "a "),
            (RawTag::SingleBacktickStart, "`"),
            (RawTag::SingleBacktickContent, "b"),
            (RawTag::UnclosedCodeSpan, "\n"),
            (RawTag::Ident, "c"),
        ]
    );
}

#[test]
fn triple_backtick_span_crosses_lines() {
    assert_eq!(
        scan_pairs("# ```\n# x\n# ```\n"),
        vec![
            (RawTag::DocumentationLineStart, "# "),
            (RawTag::TripleBacktickStart, "```"),
            (RawTag::TripleBacktickContent, "\n# x\n# "),
            (RawTag::TripleBacktickEnd, "```"),
            (RawTag::DocumentationEnd, "\n"),
        ]
    );
}

#[test]
fn documentation_line_may_end_the_input() {
    let buf = SourceBuffer::new("# last line");
    let scanner = drain(&buf);
    assert!(scanner.modes().is_floor());
    assert_eq!(
        scan_tags("# last line"),
        vec![RawTag::DocumentationLineStart, RawTag::DocumentationText]
    );
}

#[test]
fn open_code_span_at_eof_is_reported() {
    assert_eq!(
        scan("# a `b").last().copied(),
        Some(RawToken {
            tag: RawTag::UnclosedCodeSpan,
            len: 0
        })
    );
}

#[test]
fn documentation_inside_interpolation() {
    assert_eq!(
        scan_tags("string `${ # c\n x }`"),
        vec![
            RawTag::StringTemplateStart,
            RawTag::ExpressionStart,
            RawTag::Whitespace,
            RawTag::DocumentationLineStart,
            RawTag::DocumentationText,
            RawTag::DocumentationEnd,
            RawTag::Whitespace,
            RawTag::Ident,
            RawTag::Whitespace,
            RawTag::ExpressionEnd,
            RawTag::StringTemplateEnd,
        ]
    );
}

#[test]
fn deprecated_template_with_triple_backticks() {
    assert_eq!(
        scan_pairs("deprecated {\n  ```x``` }"),
        vec![
            (RawTag::DeprecatedTemplateStart, "deprecated {"),
            (RawTag::DeprecatedTemplateText, "\n  "),
            (RawTag::TripleBacktickStart, "```"),
            (RawTag::TripleBacktickContent, "x"),
            (RawTag::TripleBacktickEnd, "```"),
            (RawTag::DeprecatedTemplateText, " "),
            (RawTag::DeprecatedTemplateEnd, "}"),
        ]
    );
}

// ─── End of input ──────────────────────────────────────────────

#[test]
fn open_frames_at_eof_report_once() {
    let buf = SourceBuffer::new("x = string `abc ${y");
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        tokens.push(tok);
        if tok.tag == RawTag::Eof {
            break;
        }
    }
    let n = tokens.len();
    assert_eq!(
        tokens[n - 2],
        RawToken {
            tag: RawTag::UnterminatedTemplate,
            len: 0
        }
    );
    assert_eq!(
        scanner.take_unclosed(),
        Some(Frame {
            mode: Mode::StringTemplate,
            open: 4
        })
    );
    assert_eq!(scanner.take_unclosed(), None);
    assert!(scanner.modes().is_floor());
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
}

#[test]
fn nesting_limit_rejects_opener() {
    let buf = SourceBuffer::new("string `${x}`");
    let mut scanner = RawScanner::with_max_depth(buf.cursor(), 2);
    assert_eq!(scanner.next_token().tag, RawTag::StringTemplateStart);
    assert_eq!(
        scanner.next_token(),
        RawToken {
            tag: RawTag::NestingTooDeep,
            len: 2
        }
    );
    assert_eq!(scanner.mode(), Mode::StringTemplate);
    assert_eq!(scanner.next_token().tag, RawTag::StringTemplateText);
    assert_eq!(scanner.next_token().tag, RawTag::StringTemplateEnd);
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
}

// ─── Iterator & tokenize ───────────────────────────────────────

#[test]
fn iterator_yields_tokens_then_none() {
    let buf = SourceBuffer::new("a b");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next().map(|t| t.tag), Some(RawTag::Ident));
    assert_eq!(scanner.next().map(|t| t.tag), Some(RawTag::Whitespace));
    assert_eq!(scanner.next().map(|t| t.tag), Some(RawTag::Ident));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

// ─── Property tests ────────────────────────────────────────────

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    /// Scan to EOF, failing if the scanner does not finish in time.
    fn lossless_len(source: &str) -> Result<usize, TestCaseError> {
        let buf = SourceBuffer::new(source);
        let mut scanner = RawScanner::new(buf.cursor());
        let mut total = 0usize;
        // One token per byte at most, plus the EOF reports and Eof itself.
        for _ in 0..source.len() + 3 {
            let tok = scanner.next_token();
            if tok.tag == RawTag::Eof {
                prop_assert!(scanner.modes().is_floor());
                return Ok(total);
            }
            total += tok.len as usize;
        }
        Err(TestCaseError::fail(format!("no Eof for {source:?}")))
    }

    proptest! {
        #[test]
        fn arbitrary_text_is_scanned_losslessly(source in any::<String>()) {
            prop_assert_eq!(lossless_len(&source)?, source.len());
        }

        #[test]
        fn delimiter_heavy_text_is_scanned_losslessly(
            source in "(xml`|string `|# |# \\+ |type `|deprecated \\{|[a-z`<>{}$\"'/!?&;:=#+\\\\\\]\\[ \n\r-]){0,48}"
        ) {
            prop_assert_eq!(lossless_len(&source)?, source.len());
        }
    }
}
