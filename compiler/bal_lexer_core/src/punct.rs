//! Operator and punctuation recognition for code mode.
//!
//! A `logos` DFA gives longest-match over the operator set. Braces and `#`
//! are not here: the scanner handles them itself, since interpolation
//! frames count brace depth and `#` opens a documentation line.
//!
//! Shift operators only exist in compound-assignment form (`<<=`, `>>=`,
//! `>>>=`). logos does not fall back to a shorter accepted prefix, so the
//! bare runs `<<`, `>>` and `>>>` are declared as tokens and then cut back
//! to a single `<` or `>`; the parser reassembles shifts from those.

use logos::Logos;

use crate::tag::RawTag;

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
enum Punct {
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("?")]
    Question,
    #[token("=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token(">")]
    Greater,
    #[token("<")]
    Less,
    #[token(">=")]
    GreaterEqual,
    #[token("<=")]
    LessEqual,
    #[token("&&")]
    AmpersandAmpersand,
    #[token("||")]
    PipePipe,
    #[token("&")]
    Ampersand,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("->")]
    RightArrow,
    #[token("<-")]
    LeftArrow,
    #[token("@")]
    At,
    #[token("..")]
    DotDot,
    #[token("...")]
    DotDotDot,
    #[token("..<")]
    DotDotLess,
    #[token("|")]
    Pipe,
    #[token("=>")]
    FatArrow,
    #[token("?:")]
    Elvis,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    StarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("&=")]
    AmpersandEqual,
    #[token("|=")]
    PipeEqual,
    #[token("^=")]
    CaretEqual,
    #[token("<<=")]
    ShlEqual,
    #[token(">>=")]
    ShrEqual,
    #[token(">>>=")]
    UshrEqual,

    // Prefixes of the compound shifts; emitted as one `<` or `>`.
    #[token("<<")]
    LessRun,
    #[token(">>")]
    #[token(">>>")]
    GreaterRun,
}

impl Punct {
    fn tag(self) -> RawTag {
        match self {
            Self::Semicolon => RawTag::Semicolon,
            Self::Colon => RawTag::Colon,
            Self::ColonColon => RawTag::ColonColon,
            Self::Dot => RawTag::Dot,
            Self::Comma => RawTag::Comma,
            Self::LeftParen => RawTag::LeftParen,
            Self::RightParen => RawTag::RightParen,
            Self::LeftBracket => RawTag::LeftBracket,
            Self::RightBracket => RawTag::RightBracket,
            Self::Question => RawTag::Question,
            Self::Assign => RawTag::Assign,
            Self::Plus => RawTag::Plus,
            Self::Minus => RawTag::Minus,
            Self::Star => RawTag::Star,
            Self::Slash => RawTag::Slash,
            Self::Percent => RawTag::Percent,
            Self::Bang => RawTag::Bang,
            Self::EqualEqual => RawTag::EqualEqual,
            Self::BangEqual => RawTag::BangEqual,
            Self::Greater | Self::GreaterRun => RawTag::Greater,
            Self::Less | Self::LessRun => RawTag::Less,
            Self::GreaterEqual => RawTag::GreaterEqual,
            Self::LessEqual => RawTag::LessEqual,
            Self::AmpersandAmpersand => RawTag::AmpersandAmpersand,
            Self::PipePipe => RawTag::PipePipe,
            Self::Ampersand => RawTag::Ampersand,
            Self::Caret => RawTag::Caret,
            Self::Tilde => RawTag::Tilde,
            Self::RightArrow => RawTag::RightArrow,
            Self::LeftArrow => RawTag::LeftArrow,
            Self::At => RawTag::At,
            Self::DotDot => RawTag::DotDot,
            Self::DotDotDot => RawTag::DotDotDot,
            Self::DotDotLess => RawTag::DotDotLess,
            Self::Pipe => RawTag::Pipe,
            Self::FatArrow => RawTag::FatArrow,
            Self::Elvis => RawTag::Elvis,
            Self::PlusEqual => RawTag::PlusEqual,
            Self::MinusEqual => RawTag::MinusEqual,
            Self::StarEqual => RawTag::StarEqual,
            Self::SlashEqual => RawTag::SlashEqual,
            Self::AmpersandEqual => RawTag::AmpersandEqual,
            Self::PipeEqual => RawTag::PipeEqual,
            Self::CaretEqual => RawTag::CaretEqual,
            Self::ShlEqual => RawTag::ShlEqual,
            Self::ShrEqual => RawTag::ShrEqual,
            Self::UshrEqual => RawTag::UshrEqual,
        }
    }
}

/// Match the longest operator at the start of `rest`.
///
/// Returns the tag and byte length, or `None` if `rest` does not start
/// with an operator.
pub(crate) fn scan(rest: &str) -> Option<(RawTag, u32)> {
    let mut lexer = Punct::lexer(rest);
    let punct = lexer.next()?.ok()?;
    let len = match punct {
        Punct::LessRun | Punct::GreaterRun => 1,
        _ => u32::try_from(lexer.span().len()).ok()?,
    };
    Some((punct.tag(), len))
}

#[cfg(test)]
mod tests;
