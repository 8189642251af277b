//! Token-level queries over the concrete syntax tree.

use apollo_parser::cst::CstNode;
use apollo_parser::{SyntaxElement, SyntaxNode, SyntaxToken};
use graphql_types::OffsetRange;

/// Whitespace, commas, comments and the byte order mark carry no meaning in
/// GraphQL and are attached to whichever CST node happens to be open.
fn is_ignored(token: &SyntaxToken) -> bool {
    let text = token.text();
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
        || text == ","
        || text.starts_with('#')
}

fn token_range(token: &SyntaxToken) -> OffsetRange {
    let range = token.text_range();
    OffsetRange::new(range.start().into(), range.end().into())
}

/// Span of a node from its first to its last significant token.
///
/// Returns `None` if the node holds no significant token at all.
pub(crate) fn node_span(node: &SyntaxNode) -> Option<OffsetRange> {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(|element| match element {
            SyntaxElement::Token(token) => Some(token),
            SyntaxElement::Node(_) => None,
        })
        .filter(|token| !is_ignored(token));

    let first = tokens.next()?;
    let last = tokens.last().unwrap_or_else(|| first.clone());
    Some(OffsetRange::new(
        token_range(&first).start,
        token_range(&last).end,
    ))
}

/// Byte bounds of the line holding `offset`, without its line terminator.
fn line_bounds(text: &str, offset: usize) -> (usize, usize) {
    let bytes = text.as_bytes();
    let start = bytes[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |newline| newline + 1);
    let mut end = bytes[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |newline| offset + newline);
    if end > start && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    (start, end)
}

/// Boundaries of the lexical token under `offset`, as an editor reports it.
///
/// The token ending at or spanning `offset` (`start < offset <= end`) wins,
/// so a click right after a name or a closing brace selects it. At the start
/// of a token with nothing before it, the token starting at `offset` is used.
/// Whitespace and comments are tokens too. The result is clipped to the line
/// holding `offset`, since editor tokens never cross a line break.
/// An offset outside every token yields a zero-width range at `offset`.
///
/// The text does not need to be valid GraphQL; the syntax tree keeps every
/// byte of the input even when the parser reports errors.
#[must_use]
pub fn token_range_at(text: &str, offset: usize) -> OffsetRange {
    let tree = apollo_parser::Parser::new(text).parse();

    let mut starting_here = None;
    let mut found = None;
    for element in tree.document().syntax().descendants_with_tokens() {
        if let SyntaxElement::Token(token) = element {
            let range = token_range(&token);
            if range.start < offset && offset <= range.end {
                found = Some(range);
                break;
            }
            if range.start == offset && !range.is_empty() && starting_here.is_none() {
                starting_here = Some(range);
            }
        }
    }

    let Some(range) = found.or(starting_here) else {
        return OffsetRange::at(offset);
    };
    let (line_start, line_end) = line_bounds(text, offset);
    let start = range.start.max(line_start);
    OffsetRange::new(start, range.end.min(line_end).max(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_inside_name() {
        // "query Foo { bar }": Foo occupies 6..9
        assert_eq!(token_range_at("query Foo { bar }", 7), OffsetRange::new(6, 9));
        assert_eq!(token_range_at("query Foo { bar }", 9), OffsetRange::new(6, 9));
    }

    #[test]
    fn test_token_ending_at_offset_wins_over_token_starting_there() {
        // offset 6 sits between the space before Foo and Foo itself
        assert_eq!(token_range_at("query Foo { bar }", 6), OffsetRange::new(5, 6));
    }

    #[test]
    fn test_start_of_document_uses_first_token() {
        assert_eq!(token_range_at("query Foo { bar }", 0), OffsetRange::new(0, 5));
    }

    #[test]
    fn test_closing_brace_before_blank_lines() {
        let text = "query A {\n  a\n}\n\nquery B { b }\n";
        // offset 15 is right after the `}` closing query A
        assert_eq!(token_range_at(text, 15), OffsetRange::new(14, 15));
    }

    #[test]
    fn test_token_ending_at_offset() {
        // offset 17 is the end of the document, right after the closing brace
        assert_eq!(
            token_range_at("query Foo { bar }", 17),
            OffsetRange::new(16, 17)
        );
    }

    #[test]
    fn test_whitespace_is_clipped_to_the_line() {
        // the newlines occupy 13..16; offset 14 starts the first blank line
        let range = token_range_at("query A { a }\n\n\nquery B { b }", 14);
        assert_eq!(range, OffsetRange::new(14, 14));

        let range = token_range_at("query A { a }  \n\nquery B { b }", 15);
        assert_eq!(range, OffsetRange::new(13, 15));
    }

    #[test]
    fn test_line_bounds_exclude_crlf() {
        let text = "ab\r\ncd";
        assert_eq!(line_bounds(text, 1), (0, 2));
        assert_eq!(line_bounds(text, 4), (4, 6));
    }

    #[test]
    fn test_offset_past_end_is_zero_width() {
        assert_eq!(token_range_at("{ a }", 100), OffsetRange::at(100));
    }

    #[test]
    fn test_invalid_text_still_has_tokens() {
        assert_eq!(token_range_at("query Foo { bar", 13), OffsetRange::new(12, 15));
    }

    #[test]
    fn test_node_span_of_document_skips_trivia() {
        let text = "  # c\n  { a }  ";
        let tree = apollo_parser::Parser::new(text).parse();
        let span = node_span(tree.document().syntax()).unwrap();
        assert_eq!(&text[span.start..span.end], "{ a }");
    }
}
