use super::*;
use crate::lex_error::StructureError;

const TOP: LexErrorContext = LexErrorContext::TopLevel;

/// Cook `text` as a single token starting at offset 0.
fn cook_one(cooker: &mut TokenCooker, tag: RawTag, text: &str) -> TokenKind {
    let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
    cooker.cook(tag, Span::new(0, len), text, TOP)
}

// === Direct mapping ===

#[test]
fn operators_map_directly() {
    let mut cooker = TokenCooker::new(256);
    assert_eq!(cook_one(&mut cooker, RawTag::Assign, "="), TokenKind::Eq);
    assert_eq!(cook_one(&mut cooker, RawTag::ColonColon, "::"), TokenKind::DoubleColon);
    assert_eq!(cook_one(&mut cooker, RawTag::Elvis, "?:"), TokenKind::Elvis);
    assert_eq!(cook_one(&mut cooker, RawTag::DotDotLess, "..<"), TokenKind::DotDotLt);
    assert_eq!(cook_one(&mut cooker, RawTag::UshrEqual, ">>>="), TokenKind::UshrEq);
    assert_eq!(cook_one(&mut cooker, RawTag::LeftArrow, "<-"), TokenKind::LeftArrow);
    assert!(cooker.errors().is_empty());
}

#[test]
fn template_tags_map_directly() {
    let mut cooker = TokenCooker::new(256);
    assert_eq!(
        cook_one(&mut cooker, RawTag::XmlLiteralStart, "xml `"),
        TokenKind::XmlLiteralStart
    );
    assert_eq!(cook_one(&mut cooker, RawTag::Cdata, "<![CDATA[x]]>"), TokenKind::XmlCdata);
    assert_eq!(cook_one(&mut cooker, RawTag::EntityRef, "&amp;"), TokenKind::XmlEntityRef);
    assert_eq!(
        cook_one(&mut cooker, RawTag::ReturnParameterDocumentationStart, "# + return - "),
        TokenKind::ReturnParameterDocumentationStart
    );
    assert_eq!(
        cook_one(&mut cooker, RawTag::DefinitionReference, "type "),
        TokenKind::DefinitionReference
    );
    assert_eq!(cook_one(&mut cooker, RawTag::Whitespace, "  "), TokenKind::Whitespace);
    assert_eq!(cook_one(&mut cooker, RawTag::Eof, ""), TokenKind::Eof);
}

// === Identifiers and keywords ===

#[test]
fn identifiers_and_reserved_keywords() {
    let mut cooker = TokenCooker::new(256);
    assert_eq!(cook_one(&mut cooker, RawTag::Ident, "foo"), TokenKind::Ident);
    assert_eq!(cook_one(&mut cooker, RawTag::Ident, "function"), TokenKind::Function);
    assert_eq!(cook_one(&mut cooker, RawTag::Ident, "null"), TokenKind::Null);
    assert!(!cooker.last_cook_was_contextual_kw());
}

#[test]
fn query_keywords_follow_flags() {
    let mut cooker = TokenCooker::new(256);
    assert_eq!(cook_one(&mut cooker, RawTag::Ident, "select"), TokenKind::Ident);
    assert!(!cooker.last_cook_was_contextual_kw());

    assert_eq!(cook_one(&mut cooker, RawTag::Ident, "from"), TokenKind::From);
    assert!(cooker.query_flags().contains(QueryFlags::IN_TABLE_SQL_QUERY));
    assert_eq!(cook_one(&mut cooker, RawTag::Ident, "select"), TokenKind::Select);
    assert!(cooker.last_cook_was_contextual_kw());
    assert!(!cooker.query_flags().contains(QueryFlags::IN_TABLE_SQL_QUERY));
}

#[test]
fn quoted_identifier_is_never_a_keyword() {
    let mut cooker = TokenCooker::new(256);
    cook_one(&mut cooker, RawTag::Ident, "from");
    assert_eq!(
        cook_one(&mut cooker, RawTag::QuotedIdent, "`select`"),
        TokenKind::QuotedIdent
    );
    assert!(cooker.query_flags().contains(QueryFlags::IN_TABLE_SQL_QUERY));
}

// === Errors ===

#[test]
fn error_tags_produce_error_kind() {
    let mut cooker = TokenCooker::new(256);
    assert_eq!(
        cook_one(&mut cooker, RawTag::MalformedHexInt, "0x"),
        TokenKind::Error(LexErrorKind::MalformedLiteral(LiteralKind::HexInt))
    );
    assert_eq!(
        cook_one(&mut cooker, RawTag::UnterminatedString, "\"abc"),
        TokenKind::Error(LexErrorKind::UnterminatedLiteral(LiteralKind::String))
    );
    assert_eq!(
        cook_one(&mut cooker, RawTag::UnrecognizedChar, "$"),
        TokenKind::Error(LexErrorKind::UnrecognizedCharacter)
    );
    assert_eq!(
        cook_one(&mut cooker, RawTag::StrayCloser, "-->"),
        TokenKind::Error(StructureError::StrayCloser.into())
    );
    assert_eq!(cooker.errors().len(), 4);
    assert_eq!(cooker.errors()[1].span, Span::new(0, 4));
}

#[test]
fn errors_carry_context() {
    let mut cooker = TokenCooker::new(256);
    let context = LexErrorContext::InsideTemplate {
        start: 4,
        nesting: 2,
    };
    cooker.cook(RawTag::MissingCloser, Span::new(10, 11), "`", context);
    let errors = cooker.into_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context, context);
    assert_eq!(
        errors[0].kind,
        LexErrorKind::MalformedStructure(StructureError::MissingCloser)
    );
}

#[test]
fn unclosed_code_span_is_a_missing_closer() {
    let mut cooker = TokenCooker::new(256);
    let kind = cook_one(&mut cooker, RawTag::UnclosedCodeSpan, "\n");
    assert_eq!(
        kind,
        TokenKind::Error(LexErrorKind::MalformedStructure(StructureError::MissingCloser))
    );
    assert!(cooker.errors()[0].suggestions[0].message.contains("before the line ends"));
}

#[test]
fn nesting_error_mentions_limit() {
    let mut cooker = TokenCooker::new(4);
    cook_one(&mut cooker, RawTag::NestingTooDeep, "${");
    assert!(cooker.errors()[0].suggestions[0].message.contains("at most 4 levels"));
}

#[test]
fn unterminated_template_spans_from_opener() {
    let mut cooker = TokenCooker::new(256);
    let frame = Frame {
        mode: Mode::StringTemplate,
        open: 4,
    };
    let kind = cooker.cook_unterminated_template(Some(frame), 18, TOP);
    assert_eq!(kind, TokenKind::Error(LexErrorKind::UnterminatedTemplate));
    assert_eq!(cooker.errors()[0].span, Span::new(4, 18));
    assert!(cooker.errors()[0].suggestions[0].message.starts_with("add closing `"));
}

#[test]
fn closing_delimiters() {
    assert_eq!(closing_delimiter(Mode::Xml), "`");
    assert_eq!(closing_delimiter(Mode::DocTemplate), "\n");
    assert_eq!(closing_delimiter(Mode::XmlComment), "-->");
    assert_eq!(closing_delimiter(Mode::Expression { depth: 0 }), "}");
}
