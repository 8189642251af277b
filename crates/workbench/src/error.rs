use graphql_locator::LookupFailure;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// Inspection is only wired up once the explorer has a schema to show.
    #[error("Schema has not been loaded")]
    SchemaNotLoaded,

    #[error(transparent)]
    Lookup(#[from] LookupFailure),
}
