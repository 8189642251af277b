use graphql_syntax::SyntaxError;
use thiserror::Error;

use crate::ClickPosition;

/// Why a click could not be resolved to a definition.
///
/// None of these are fatal. The caller logs them and does not navigate; a
/// new click is needed to try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupFailure {
    #[error("Error parsing query: {0}")]
    ParseFailure(#[source] SyntaxError),

    #[error("Query document contains no definitions")]
    EmptyDocument,

    #[error("Unable to find definition corresponding to mouse position {click}")]
    NoMatch { click: ClickPosition },
}
