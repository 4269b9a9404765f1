//! Flags gating the embedded query language's keywords.
//!
//! Query words such as `select` or `events` are plain identifiers unless
//! a guarding flag is set. Flags are set and cleared by keywords as they
//! are scanned, so the decision is made at the lexical level and the parser
//! never has to backtrack over an identifier.
//!
//! # Transition table
//!
//! | word                           | keyword only if          | effect                                  |
//! |--------------------------------|--------------------------|-----------------------------------------|
//! | `forever`                      | always                   | set `IN_QUERY`                          |
//! | `from`                         | always                   | set all four clause flags               |
//! | `select`                       | `IN_TABLE_SQL_QUERY`     | clear `IN_TABLE_SQL_QUERY`              |
//! | `insert` `update` `delete`     | `IN_QUERY`               | clear `IN_QUERY`                        |
//! | `into` `set`                   | `IN_QUERY_INSERT_CLAUSE` |                                         |
//! | `events`                       | `IN_QUERY_INSERT_CLAUSE` | clear `IN_QUERY_INSERT_CLAUSE`          |
//! | `last` `first`                 | `IN_OUTPUT_RATE_LIMIT`   | clear `IN_QUERY`, `IN_OUTPUT_RATE_LIMIT`|
//! | `output`                       | `IN_OUTPUT_RATE_LIMIT`   | clear `IN_QUERY`, set `IN_TIME_SCALE`   |
//! | `for` `within`                 | always                   | set `IN_TIME_SCALE`                     |
//! | `second(s)` … `year(s)`        | `IN_TIME_SCALE`          | clear `IN_TIME_SCALE`                   |
//!
//! Guards are checked before effects. `from`, `for`, `within` and
//! `forever` are reserved keywords whatever the flags.

use bitflags::bitflags;

use crate::token::TokenKind;

bitflags! {
    /// Query-language state carried across tokens.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct QueryFlags: u8 {
        /// Inside a streaming query; `insert`/`update`/`delete` are keywords.
        const IN_QUERY = 1 << 0;
        /// `from` seen and no `select` yet.
        const IN_TABLE_SQL_QUERY = 1 << 1;
        /// `into`, `set` and `events` are keywords.
        const IN_QUERY_INSERT_CLAUSE = 1 << 2;
        /// `last`, `first` and `output` are keywords.
        const IN_OUTPUT_RATE_LIMIT = 1 << 3;
        /// Time-unit words are keywords.
        const IN_TIME_SCALE = 1 << 4;
    }
}

/// One row of the transition table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct QueryRule {
    pub(crate) kind: TokenKind,
    /// Flags that must all be set for the word to be a keyword. Empty means
    /// always.
    pub(crate) guard: QueryFlags,
    pub(crate) clear: QueryFlags,
    pub(crate) set: QueryFlags,
}

const fn rule(kind: TokenKind, guard: QueryFlags, clear: QueryFlags, set: QueryFlags) -> QueryRule {
    QueryRule {
        kind,
        guard,
        clear,
        set,
    }
}

const NONE: QueryFlags = QueryFlags::empty();

/// The rule for `text`, if it is a query-sensitive word.
pub(crate) fn rule_for(text: &str) -> Option<QueryRule> {
    use crate::query_flags::QueryFlags as F;

    let time_unit = |kind| rule(kind, F::IN_TIME_SCALE, F::IN_TIME_SCALE, NONE);
    let found = match text {
        "forever" => rule(TokenKind::Forever, NONE, NONE, F::IN_QUERY),
        "from" => rule(
            TokenKind::From,
            NONE,
            NONE,
            F::IN_QUERY
                .union(F::IN_TABLE_SQL_QUERY)
                .union(F::IN_QUERY_INSERT_CLAUSE)
                .union(F::IN_OUTPUT_RATE_LIMIT),
        ),
        "select" => rule(
            TokenKind::Select,
            F::IN_TABLE_SQL_QUERY,
            F::IN_TABLE_SQL_QUERY,
            NONE,
        ),
        "insert" => rule(TokenKind::Insert, F::IN_QUERY, F::IN_QUERY, NONE),
        "update" => rule(TokenKind::Update, F::IN_QUERY, F::IN_QUERY, NONE),
        "delete" => rule(TokenKind::Delete, F::IN_QUERY, F::IN_QUERY, NONE),
        "into" => rule(TokenKind::Into, F::IN_QUERY_INSERT_CLAUSE, NONE, NONE),
        "set" => rule(TokenKind::Set, F::IN_QUERY_INSERT_CLAUSE, NONE, NONE),
        "events" => rule(
            TokenKind::Events,
            F::IN_QUERY_INSERT_CLAUSE,
            F::IN_QUERY_INSERT_CLAUSE,
            NONE,
        ),
        "last" => rule(
            TokenKind::Last,
            F::IN_OUTPUT_RATE_LIMIT,
            F::IN_QUERY.union(F::IN_OUTPUT_RATE_LIMIT),
            NONE,
        ),
        "first" => rule(
            TokenKind::First,
            F::IN_OUTPUT_RATE_LIMIT,
            F::IN_QUERY.union(F::IN_OUTPUT_RATE_LIMIT),
            NONE,
        ),
        "output" => rule(
            TokenKind::Output,
            F::IN_OUTPUT_RATE_LIMIT,
            F::IN_QUERY,
            F::IN_TIME_SCALE,
        ),
        "for" => rule(TokenKind::For, NONE, NONE, F::IN_TIME_SCALE),
        "within" => rule(TokenKind::Within, NONE, NONE, F::IN_TIME_SCALE),
        "second" | "seconds" => time_unit(TokenKind::Second),
        "minute" | "minutes" => time_unit(TokenKind::Minute),
        "hour" | "hours" => time_unit(TokenKind::Hour),
        "day" | "days" => time_unit(TokenKind::Day),
        "month" | "months" => time_unit(TokenKind::Month),
        "year" | "years" => time_unit(TokenKind::Year),
        _ => return None,
    };
    Some(found)
}

impl QueryFlags {
    /// Resolve a query-sensitive word and apply its effect.
    ///
    /// Returns `None` when `text` is not in the table. Returns
    /// `Some(TokenKind::Ident)` when the guard does not hold; flags are then
    /// left untouched.
    pub(crate) fn resolve(&mut self, text: &str) -> Option<TokenKind> {
        let rule = rule_for(text)?;
        if !self.contains(rule.guard) {
            return Some(TokenKind::Ident);
        }
        self.remove(rule.clear);
        self.insert(rule.set);
        Some(rule.kind)
    }
}
