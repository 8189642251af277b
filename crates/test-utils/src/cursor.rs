//! Position and range markers for fixture text.
//!
//! When testing click resolution you need to point at a spot in the source.
//! These helpers let a fixture carry its own markers, which are stripped
//! before the text is handed to the code under test.

use graphql_types::{OffsetRange, Position};

/// Advance an editor position past `ch`.
fn advance(position: &mut Position, ch: char) {
    if ch == '\n' {
        position.line += 1;
        position.character = 0;
    } else {
        position.character += ch.len_utf16() as u32;
    }
}

/// Extract cursor position from source marked with `*`.
///
/// # Example
///
/// ```
/// use graphql_test_utils::extract_cursor;
///
/// let (source, pos) = extract_cursor("query {\n  *user\n}");
/// assert_eq!(source, "query {\n  user\n}");
/// assert_eq!((pos.line, pos.character), (1, 2));
/// ```
///
/// # Panics
///
/// Panics if the input contains no `*` marker or multiple `*` markers.
pub fn extract_cursor(input: &str) -> (String, Position) {
    let marker_count = input.chars().filter(|&c| c == '*').count();
    assert!(
        marker_count == 1,
        "extract_cursor: input must contain exactly one '*' marker, found {marker_count}"
    );

    let mut position = Position::default();
    let mut found = Position::default();
    let mut result = String::with_capacity(input.len() - 1);

    for ch in input.chars() {
        if ch == '*' {
            found = position;
        } else {
            result.push(ch);
            advance(&mut position, ch);
        }
    }

    (result, found)
}

/// Extract multiple cursor positions from source marked with `$1`, `$2`, ...
///
/// Returns the clean source and the positions in marker order.
///
/// ```
/// use graphql_test_utils::extract_cursors;
///
/// let (source, positions) = extract_cursors("query $1A { a }\nquery $2B { b }");
/// assert_eq!(source, "query A { a }\nquery B { b }");
/// assert_eq!(positions.len(), 2);
/// assert_eq!(positions[1].line, 1);
/// ```
///
/// `$` followed by anything other than a digit is kept, so variable
/// references like `$id` survive.
pub fn extract_cursors(input: &str) -> (String, Vec<Position>) {
    let mut markers: Vec<(u32, Position)> = Vec::new();
    let mut result = String::with_capacity(input.len());
    let mut position = Position::default();

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '$' {
            if let Some(marker) = chars.peek().and_then(|c| c.to_digit(10)) {
                chars.next();
                markers.push((marker, position));
                continue;
            }
        }

        result.push(ch);
        advance(&mut position, ch);
    }

    markers.sort_by_key(|(marker, _)| *marker);
    (result, markers.into_iter().map(|(_, pos)| pos).collect())
}

/// Extract a byte range marked with `<<` and `>>`.
///
/// ```
/// use graphql_test_utils::extract_range;
///
/// let (source, range) = extract_range("query <<Foo>> { bar }");
/// assert_eq!(source, "query Foo { bar }");
/// assert_eq!((range.start, range.end), (6, 9));
/// ```
///
/// # Panics
///
/// Panics unless the input contains exactly one `<<` followed by one `>>`.
pub fn extract_range(input: &str) -> (String, OffsetRange) {
    let open = input.find("<<");
    let close = input.find(">>");
    let (Some(open), Some(close)) = (open, close) else {
        panic!("extract_range: input must contain both '<<' and '>>' markers");
    };
    assert!(open < close, "extract_range: '<<' must come before '>>'");
    assert!(
        input.matches("<<").count() == 1 && input.matches(">>").count() == 1,
        "extract_range: input must contain exactly one '<<' and one '>>'"
    );

    let result = input.replacen("<<", "", 1).replacen(">>", "", 1);
    (result, OffsetRange::new(open, close - 2))
}
