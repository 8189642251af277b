//! The tagged definition model.

use graphql_types::OffsetRange;

/// The operation type of an operation definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The keyword used for this operation type in GraphQL source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a top-level definition declares.
///
/// Only executable definitions are interesting to the explorer; every other
/// kind (type-system definitions and extensions, directive definitions)
/// collapses into [`DefinitionKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Operation {
        operation: OperationKind,
        name: Option<String>,
    },
    Fragment {
        name: Option<String>,
    },
    Other,
}

impl DefinitionKind {
    /// The declared name, if this kind carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Operation { name, .. } | Self::Fragment { name } => name.as_deref(),
            Self::Other => None,
        }
    }
}

/// One top-level definition of a query document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Definition {
    pub kind: DefinitionKind,
    /// Byte span from the first to the last significant token of the
    /// definition. `None` when the parser produced no location for it.
    pub span: Option<OffsetRange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_keywords() {
        assert_eq!(OperationKind::Query.to_string(), "query");
        assert_eq!(OperationKind::Mutation.to_string(), "mutation");
        assert_eq!(OperationKind::Subscription.to_string(), "subscription");
    }

    #[test]
    fn test_definition_kind_name() {
        let op = DefinitionKind::Operation {
            operation: OperationKind::Query,
            name: Some("GetUser".to_string()),
        };
        assert_eq!(op.name(), Some("GetUser"));
        assert_eq!(DefinitionKind::Fragment { name: None }.name(), None);
        assert_eq!(DefinitionKind::Other.name(), None);
    }
}
