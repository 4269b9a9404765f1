use pretty_assertions::assert_eq;

use super::*;

fn first(rest: &str) -> Option<(RawTag, u32)> {
    scan(rest)
}

#[test]
fn every_fixed_operator_round_trips_through_its_lexeme() {
    let tags = [
        RawTag::Semicolon,
        RawTag::Colon,
        RawTag::ColonColon,
        RawTag::Dot,
        RawTag::Comma,
        RawTag::LeftParen,
        RawTag::RightParen,
        RawTag::LeftBracket,
        RawTag::RightBracket,
        RawTag::Question,
        RawTag::Assign,
        RawTag::Plus,
        RawTag::Minus,
        RawTag::Star,
        RawTag::Slash,
        RawTag::Percent,
        RawTag::Bang,
        RawTag::EqualEqual,
        RawTag::BangEqual,
        RawTag::Greater,
        RawTag::Less,
        RawTag::GreaterEqual,
        RawTag::LessEqual,
        RawTag::AmpersandAmpersand,
        RawTag::PipePipe,
        RawTag::Ampersand,
        RawTag::Caret,
        RawTag::Tilde,
        RawTag::RightArrow,
        RawTag::LeftArrow,
        RawTag::At,
        RawTag::DotDot,
        RawTag::DotDotDot,
        RawTag::DotDotLess,
        RawTag::Pipe,
        RawTag::FatArrow,
        RawTag::Elvis,
        RawTag::PlusEqual,
        RawTag::MinusEqual,
        RawTag::StarEqual,
        RawTag::SlashEqual,
        RawTag::AmpersandEqual,
        RawTag::PipeEqual,
        RawTag::CaretEqual,
        RawTag::ShlEqual,
        RawTag::ShrEqual,
        RawTag::UshrEqual,
    ];
    for tag in tags {
        let Some(text) = tag.lexeme() else {
            panic!("{tag:?} has no fixed lexeme");
        };
        let len = u32::try_from(text.len()).unwrap_or(u32::MAX);
        assert_eq!(first(text), Some((tag, len)), "operator {text:?}");
    }
}

#[test]
fn longest_match_wins() {
    assert_eq!(first("...x"), Some((RawTag::DotDotDot, 3)));
    assert_eq!(first("..<5"), Some((RawTag::DotDotLess, 3)));
    assert_eq!(first("..5"), Some((RawTag::DotDot, 2)));
    assert_eq!(first("?:b"), Some((RawTag::Elvis, 2)));
    assert_eq!(first("=>x"), Some((RawTag::FatArrow, 2)));
}

#[test]
fn bare_shift_runs_split_into_single_angle() {
    assert_eq!(first("<<x"), Some((RawTag::Less, 1)));
    assert_eq!(first(">>x"), Some((RawTag::Greater, 1)));
    assert_eq!(first(">>>x"), Some((RawTag::Greater, 1)));
    assert_eq!(first(">>>=x"), Some((RawTag::UshrEqual, 4)));
    assert_eq!(first("<<=1"), Some((RawTag::ShlEqual, 3)));
}

#[test]
fn non_operators_return_none() {
    assert_eq!(first("$"), None);
    assert_eq!(first("\\"), None);
    assert_eq!(first(""), None);
    assert_eq!(first("abc"), None);
    assert_eq!(first("# doc"), None);
}
