//! Reserved keyword resolution.
//!
//! Two-table keyword system:
//! 1. **Reserved keywords**: length-bucketed lookup here, always resolved
//! 2. **Query keywords**: resolved by [`crate::query_flags`] before this
//!    table, because whether they are keywords depends on the query flags
//!
//! `true`, `false` and `null` live in the reserved table. Template opener
//! words (`xml`, `string`, `deprecated`) only reach this table when the
//! raw scanner found no opener trigger after them, so they resolve to
//! their bare keyword.
//!
//! `variable` and `module` are reserved only as reference kinds inside
//! documentation; in code they are identifiers.

use crate::token::TokenKind;

/// Look up a reserved keyword by text.
///
/// Uses length-bucketing for fast rejection: identifiers whose length falls
/// outside the 2-14 range are immediately rejected without any comparison.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all keywords are 2-14 chars of lowercase ASCII
    if !(2..=14).contains(&len) {
        return None;
    }
    if !bytes[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        2 => match text {
            "as" => Some(TokenKind::As),
            "by" => Some(TokenKind::By),
            "if" => Some(TokenKind::If),
            "in" => Some(TokenKind::In),
            "on" => Some(TokenKind::On),
            _ => None,
        },
        3 => match text {
            "all" => Some(TokenKind::All),
            "any" => Some(TokenKind::AnyType),
            "but" => Some(TokenKind::But),
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::IntType),
            "map" => Some(TokenKind::MapType),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            "var" => Some(TokenKind::Var),
            "xml" => Some(TokenKind::XmlType),
            _ => None,
        },
        4 => match text {
            "bind" => Some(TokenKind::Bind),
            "byte" => Some(TokenKind::ByteType),
            "done" => Some(TokenKind::Done),
            "else" => Some(TokenKind::Else),
            "fork" => Some(TokenKind::Fork),
            "from" => Some(TokenKind::From),
            "full" => Some(TokenKind::Full),
            "join" => Some(TokenKind::Join),
            "json" => Some(TokenKind::JsonType),
            "left" => Some(TokenKind::Left),
            "lock" => Some(TokenKind::Lock),
            "null" => Some(TokenKind::Null),
            "some" => Some(TokenKind::Some),
            "trap" => Some(TokenKind::Trap),
            "true" => Some(TokenKind::True),
            "type" => Some(TokenKind::Type),
            "with" => Some(TokenKind::With),
            _ => None,
        },
        5 => match text {
            "abort" => Some(TokenKind::Abort),
            "await" => Some(TokenKind::Await),
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "check" => Some(TokenKind::Check),
            "error" => Some(TokenKind::ErrorType),
            "every" => Some(TokenKind::Every),
            "false" => Some(TokenKind::False),
            "float" => Some(TokenKind::FloatType),
            "group" => Some(TokenKind::Group),
            "inner" => Some(TokenKind::Inner),
            "limit" => Some(TokenKind::Limit),
            "match" => Some(TokenKind::Match),
            "order" => Some(TokenKind::Order),
            "outer" => Some(TokenKind::Outer),
            "panic" => Some(TokenKind::Panic),
            "query" => Some(TokenKind::Query),
            "retry" => Some(TokenKind::Retry),
            "right" => Some(TokenKind::Right),
            "scope" => Some(TokenKind::Scope),
            "start" => Some(TokenKind::Start),
            "table" => Some(TokenKind::TableType),
            "throw" => Some(TokenKind::Throw),
            "where" => Some(TokenKind::Where),
            "while" => Some(TokenKind::While),
            "xmlns" => Some(TokenKind::Xmlns),
            _ => None,
        },
        6 => match text {
            "extern" => Some(TokenKind::Extern),
            "future" => Some(TokenKind::FutureType),
            "having" => Some(TokenKind::Having),
            "import" => Some(TokenKind::Import),
            "object" => Some(TokenKind::Object),
            "public" => Some(TokenKind::Public),
            "record" => Some(TokenKind::Record),
            "reduce" => Some(TokenKind::Reduce),
            "return" => Some(TokenKind::Return),
            "stream" => Some(TokenKind::StreamType),
            "string" => Some(TokenKind::StringType),
            "within" => Some(TokenKind::Within),
            "window" => Some(TokenKind::Window),
            "worker" => Some(TokenKind::Worker),
            _ => None,
        },
        7 => match text {
            "boolean" => Some(TokenKind::BooleanType),
            "channel" => Some(TokenKind::Channel),
            "current" => Some(TokenKind::Current),
            "expired" => Some(TokenKind::Expired),
            "finally" => Some(TokenKind::Finally),
            "foreach" => Some(TokenKind::Foreach),
            "forever" => Some(TokenKind::Forever),
            "onabort" => Some(TokenKind::OnAbort),
            "onretry" => Some(TokenKind::OnRetry),
            "private" => Some(TokenKind::Private),
            "retries" => Some(TokenKind::Retries),
            "returns" => Some(TokenKind::Returns),
            "service" => Some(TokenKind::Service),
            "timeout" => Some(TokenKind::Timeout),
            "untaint" => Some(TokenKind::Untaint),
            "version" => Some(TokenKind::Version),
            _ => None,
        },
        8 => match text {
            "abstract" => Some(TokenKind::Abstract),
            "continue" => Some(TokenKind::Continue),
            "endpoint" => Some(TokenKind::Endpoint),
            "followed" => Some(TokenKind::Followed),
            "function" => Some(TokenKind::Function),
            "lengthof" => Some(TokenKind::LengthOf),
            "oncommit" => Some(TokenKind::OnCommit),
            "resource" => Some(TokenKind::Resource),
            "snapshot" => Some(TokenKind::Snapshot),
            "typedesc" => Some(TokenKind::TypedescType),
            _ => None,
        },
        9 => match text {
            "ascending" => Some(TokenKind::Ascending),
            "parameter" => Some(TokenKind::Parameter),
            _ => None,
        },
        10 => match text {
            "annotation" => Some(TokenKind::Annotation),
            "compensate" => Some(TokenKind::Compensate),
            "deprecated" => Some(TokenKind::Deprecated),
            "descending" => Some(TokenKind::Descending),
            "primarykey" => Some(TokenKind::PrimaryKey),
            _ => None,
        },
        11 => match text {
            "transaction" => Some(TokenKind::Transaction),
            "transformer" => Some(TokenKind::Transformer),
            _ => None,
        },
        12 => match text {
            "compensation" => Some(TokenKind::Compensation),
            _ => None,
        },
        14 => match text {
            "unidirectional" => Some(TokenKind::Unidirectional),
            _ => None,
        },
        _ => None,
    }
}

/// The kind named by the word of a documentation definition reference.
pub(crate) fn reference_kind(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "type" => TokenKind::Type,
        "service" => TokenKind::Service,
        "variable" => TokenKind::Variable,
        "var" => TokenKind::Var,
        "annotation" => TokenKind::Annotation,
        "module" => TokenKind::Module,
        "function" => TokenKind::Function,
        "parameter" => TokenKind::Parameter,
        _ => return None,
    };
    Some(kind)
}
