//! # graphql-locator
//!
//! Finds which top-level operation or fragment of a query document a click
//! landed in, and names it the way the schema explorer names its nodes.
//!
//! ```text
//! editor click ──► ClickPosition ──► locate() ──► TargetIdentifier ──► Navigator
//!                  (token bounds)    (pure)       "query-GetUser"      (host UI)
//! ```
//!
//! [`locate`] is a pure function of the current text and the click interval.
//! It re-parses the text on every call and never panics on bad input; every
//! way it can fail is a [`LookupFailure`] value. Turning an identifier into a
//! scroll is the caller's business, expressed through the [`Navigator`] trait.
//!
//! ```rust
//! use graphql_locator::{locate, ClickPosition};
//!
//! let target = locate("query Foo { bar }", ClickPosition::new(6, 9)).unwrap();
//! assert_eq!(target.to_string(), "query-Foo");
//! ```

mod click;
mod error;
mod navigate;
mod target;

use graphql_syntax::{parse_document, Definition, QueryDocument};

pub use click::ClickPosition;
pub use error::LookupFailure;
pub use navigate::{inspect, Navigator};
pub use target::{TargetIdentifier, TargetKind, UNKNOWN_NAME};

/// Resolve a click interval to the identifier of the definition containing it.
///
/// The text is parsed from scratch. Definitions are scanned in document order
/// and the first whose span fully contains the click wins. Definitions
/// without location information are skipped.
#[tracing::instrument(skip(document_text), fields(len = document_text.len(), click = %click))]
pub fn locate(
    document_text: &str,
    click: ClickPosition,
) -> Result<TargetIdentifier, LookupFailure> {
    let document = parse_document(document_text).map_err(LookupFailure::ParseFailure)?;
    locate_in(&document, click)
}

/// Resolve a click against an already parsed document.
///
/// `apollo-parser` rejects documents without definitions, so through
/// [`locate`] the [`LookupFailure::EmptyDocument`] case only arises if the
/// parser starts accepting them.
pub fn locate_in(
    document: &QueryDocument,
    click: ClickPosition,
) -> Result<TargetIdentifier, LookupFailure> {
    if document.is_empty() {
        return Err(LookupFailure::EmptyDocument);
    }

    let definition = find_definition(document.definitions(), click)
        .ok_or(LookupFailure::NoMatch { click })?;

    let target = TargetIdentifier::for_definition(&definition.kind);
    tracing::debug!(target = %target, "Located definition");
    Ok(target)
}

/// First definition, in slice order, whose span contains `click`.
#[must_use]
pub fn find_definition(definitions: &[Definition], click: ClickPosition) -> Option<&Definition> {
    definitions.iter().find(|definition| {
        let Some(span) = definition.span else {
            tracing::debug!("Missing location information for definition");
            return false;
        };
        span.contains_range(click.range())
    })
}
