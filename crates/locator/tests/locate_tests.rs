//! End-to-end lookups over realistic editor contents.

use graphql_locator::{locate, ClickPosition, LookupFailure};
use graphql_test_utils::assertions::format_outcomes;
use graphql_test_utils::{extract_cursors, extract_range};

const EDITOR_CONTENTS: &str = r"# Welcome to GraphiQL
query $1GetUser($id: ID!) {
  user(id: $id) {
    ...$2UserFields
  }
}

mutation { $3rename(name: $name) { id } }

fragment UserFields on User {
  id
  $4name
}

subscription OnEvent { $5event { id } }
# end of $6document
";

fn click_at_marker(source: &str, position: graphql_types::Position) -> ClickPosition {
    ClickPosition::from_editor_position(source, position).unwrap()
}

#[test]
fn clicks_across_a_multi_definition_document() {
    let (source, positions) = extract_cursors(EDITOR_CONTENTS);

    let outcomes: Vec<_> = positions
        .iter()
        .map(|position| {
            let click = click_at_marker(&source, *position);
            (position.to_string(), locate(&source, click))
        })
        .collect();

    insta::assert_snapshot!(format_outcomes(&outcomes), @r"
    1:6 => query-GetUser
    3:7 => query-GetUser
    7:11 => mutation-unknown
    11:2 => fragment-UserFields
    14:23 => subscription-OnEvent
    15:9 => error: Unable to find definition corresponding to mouse position 215..232
    ");
}

#[test]
fn click_just_after_closing_brace_selects_the_definition() {
    let (source, positions) = extract_cursors("query A {\n  a\n}$1\n\nquery B { b }\n");
    let click = click_at_marker(&source, positions[0]);
    assert_eq!(click, ClickPosition::new(14, 15));
    assert_eq!(locate(&source, click).unwrap().to_string(), "query-A");
}

#[test]
fn click_on_blank_line_between_definitions_matches_nothing() {
    let (source, positions) = extract_cursors("query A { a }\n$1\nquery B { b }");
    let click = click_at_marker(&source, positions[0]);
    assert!(matches!(
        locate(&source, click),
        Err(LookupFailure::NoMatch { .. })
    ));
}

#[test]
fn exact_definition_span_matches() {
    let (source, range) = extract_range("query A { a }\n\n<<fragment F on T { x }>>\n");
    let target = locate(&source, range.into()).unwrap();
    assert_eq!(target.to_string(), "fragment-F");
}

#[test]
fn extending_past_the_span_by_one_byte_does_not_match() {
    let (source, range) = extract_range("<<query A { a }>>\nquery B { b }");
    let widened = ClickPosition::new(range.start, range.end + 1);
    assert_eq!(
        locate(&source, widened),
        Err(LookupFailure::NoMatch { click: widened })
    );

    let shifted = ClickPosition::new(range.start.saturating_sub(1), range.end);
    assert_eq!(locate(&source, shifted).unwrap().to_string(), "query-A");
}

#[test]
fn click_spanning_two_definitions_matches_neither() {
    let source = "query A { a }\nquery B { b }";
    let click = ClickPosition::new(6, 21);
    assert!(matches!(
        locate(source, click),
        Err(LookupFailure::NoMatch { .. })
    ));
}

#[test]
fn anonymous_query_anywhere_inside() {
    let source = "{ bar }";
    for offset in 0..source.len() {
        let click = ClickPosition::from_token_at(source, offset);
        assert_eq!(
            locate(source, click).unwrap().to_string(),
            "query-unknown",
            "offset {offset}"
        );
    }
}

#[test]
fn schema_definitions_resolve_to_unknown_unknown() {
    let (source, range) = extract_range("type <<User>> { id: ID! }");
    assert_eq!(
        locate(&source, range.into()).unwrap().to_string(),
        "unknown-unknown"
    );
}

#[test]
fn failures_never_panic() {
    for source in ["", "   ", "{", "query Foo { bar", "fragment on { }", "}}}}", "# only"] {
        let result = locate(source, ClickPosition::new(0, 1));
        assert!(result.is_err(), "expected failure for {source:?}");
    }
}
