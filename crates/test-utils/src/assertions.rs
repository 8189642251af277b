//! Snapshot formatting helpers.
//!
//! Lookup outcomes are rendered one per line so that a table of clicks and
//! their results reads naturally in an inline snapshot:
//!
//! ```ignore
//! use graphql_test_utils::assertions::format_outcomes;
//!
//! let outcomes = clicks.iter().map(|c| (c.to_string(), locate(text, *c))).collect::<Vec<_>>();
//! insta::assert_snapshot!(format_outcomes(&outcomes), @"...");
//! ```

use std::fmt::Display;

/// Format `(label, result)` pairs as `label => ok` / `label => error: ...`.
pub fn format_outcomes<L, T, E>(outcomes: &[(L, Result<T, E>)]) -> String
where
    L: Display,
    T: Display,
    E: Display,
{
    if outcomes.is_empty() {
        return String::from("(no outcomes)");
    }

    outcomes
        .iter()
        .map(|(label, result)| match result {
            Ok(value) => format!("{label} => {value}"),
            Err(error) => format!("{label} => error: {error}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
