use super::*;

fn track(pieces: &[&str]) -> Vec<LineCol> {
    let mut tracker = LineTracker::new();
    pieces
        .iter()
        .map(|piece| {
            tracker.advance(piece);
            tracker.position()
        })
        .collect()
}

#[test]
fn starts_at_one_one() {
    assert_eq!(LineTracker::new().position(), LineCol::new(1, 1));
}

#[test]
fn columns_count_chars_not_bytes() {
    assert_eq!(track(&["λx", " ", "€"]), vec![
        LineCol::new(1, 3),
        LineCol::new(1, 4),
        LineCol::new(1, 5),
    ]);
}

#[test]
fn newline_and_crlf_end_lines() {
    assert_eq!(track(&["a", "\n", "b", "\r\n", "cd"]), vec![
        LineCol::new(1, 2),
        LineCol::new(2, 1),
        LineCol::new(2, 2),
        LineCol::new(3, 1),
        LineCol::new(3, 3),
    ]);
}

#[test]
fn lone_cr_is_a_column() {
    assert_eq!(track(&["a", "\r", "b"]), vec![
        LineCol::new(1, 2),
        LineCol::new(1, 3),
        LineCol::new(1, 4),
    ]);
}

#[test]
fn multi_line_token() {
    assert_eq!(track(&["<!--a\nbb\nccc"]), vec![LineCol::new(3, 4)]);
}

#[test]
fn empty_token_does_not_move() {
    assert_eq!(track(&["ab", ""]), vec![LineCol::new(1, 3), LineCol::new(1, 3)]);
}

#[test]
fn line_col_at_offsets() {
    let source = "ab\nλc\n";
    assert_eq!(line_col_at(source, 0), LineCol::new(1, 1));
    assert_eq!(line_col_at(source, 3), LineCol::new(2, 1));
    assert_eq!(line_col_at(source, 5), LineCol::new(2, 2));
    assert_eq!(line_col_at(source, 7), LineCol::new(3, 1));
    assert_eq!(line_col_at(source, 100), LineCol::new(3, 1));
}
