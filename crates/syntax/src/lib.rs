//! # GraphQL Syntax Parsing
//!
//! This crate turns the text of the query editor into a flat list of
//! top-level [`Definition`]s, each carrying the byte span it occupies in the
//! text. It is the only layer that talks to `apollo-parser`; everything above
//! it works with the tagged [`DefinitionKind`] enum instead of CST nodes.
//!
//! Documents are never cached. Every call to [`parse_document`] re-parses the
//! text, because the editor contents change between clicks.
//!
//! ```rust
//! use graphql_syntax::{parse_document, DefinitionKind, OperationKind};
//!
//! let doc = parse_document("query Foo { bar }").unwrap();
//! let def = &doc.definitions()[0];
//! assert_eq!(
//!     def.kind,
//!     DefinitionKind::Operation { operation: OperationKind::Query, name: Some("Foo".into()) }
//! );
//! ```

mod definition;
mod line_index;
mod token;

use apollo_parser::cst::{self, CstNode};

pub use definition::{Definition, DefinitionKind, OperationKind};
pub use line_index::LineIndex;
use token::node_span;
pub use token::token_range_at;

/// A parse error with position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message
    pub message: String,
    /// Byte offset where the error occurred
    pub offset: usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

/// Why a document could not be turned into definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// The text is empty or contains only whitespace.
    #[error("query document is empty")]
    Empty,

    /// The parser reported at least one syntax error.
    #[error("invalid query document: {}", .errors.first().map(ToString::to_string).unwrap_or_default())]
    Invalid {
        /// Every error reported by the parser, in source order
        errors: Vec<ParseError>,
    },
}

/// A successfully parsed query document.
///
/// Definitions are kept in document order; their spans do not overlap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryDocument {
    definitions: Vec<Definition>,
}

impl QueryDocument {
    /// Top-level definitions in the order they appear in the text.
    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Returns true if the document declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Parse query text into a [`QueryDocument`].
///
/// Empty or whitespace-only text is rejected up front as
/// [`SyntaxError::Empty`]. Text with nothing but comments reaches the parser
/// and comes back as [`SyntaxError::Invalid`].
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn parse_document(text: &str) -> Result<QueryDocument, SyntaxError> {
    if text.trim().is_empty() {
        tracing::debug!("Refusing to parse empty document");
        return Err(SyntaxError::Empty);
    }

    let tree = apollo_parser::Parser::new(text).parse();

    let errors: Vec<ParseError> = tree
        .errors()
        .map(|e| ParseError {
            message: e.message().to_string(),
            offset: e.index(),
        })
        .collect();

    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "Document has syntax errors");
        return Err(SyntaxError::Invalid { errors });
    }

    let definitions: Vec<Definition> = tree
        .document()
        .definitions()
        .map(|definition| lower_definition(&definition))
        .collect();

    tracing::trace!(definitions = definitions.len(), "Parsed document");
    Ok(QueryDocument { definitions })
}

/// Convert a CST definition into the tagged model.
fn lower_definition(definition: &cst::Definition) -> Definition {
    let kind = match definition {
        cst::Definition::OperationDefinition(op) => DefinitionKind::Operation {
            operation: op
                .operation_type()
                .map_or(OperationKind::Query, |op_type| {
                    if op_type.mutation_token().is_some() {
                        OperationKind::Mutation
                    } else if op_type.subscription_token().is_some() {
                        OperationKind::Subscription
                    } else {
                        OperationKind::Query
                    }
                }),
            name: op.name().map(|n| n.text().to_string()),
        },
        cst::Definition::FragmentDefinition(frag) => DefinitionKind::Fragment {
            name: frag
                .fragment_name()
                .and_then(|n| n.name())
                .map(|n| n.text().to_string()),
        },
        _ => DefinitionKind::Other,
    };

    Definition {
        kind,
        span: node_span(definition.syntax()),
    }
}
