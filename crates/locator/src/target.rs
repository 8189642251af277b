//! Explorer node identifiers.

use graphql_syntax::{DefinitionKind, OperationKind};

/// Name used when a definition is anonymous or of an unrecognized kind.
pub const UNKNOWN_NAME: &str = "unknown";

/// Root element of the explorer panel; node ids are looked up beneath it.
const EXPLORER_ROOT_SELECTOR: &str = ".graphiql-explorer-root";

/// The kind component of a [`TargetIdentifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Query,
    Mutation,
    Subscription,
    Fragment,
    Unknown,
}

impl TargetKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
            Self::Fragment => "fragment",
            Self::Unknown => UNKNOWN_NAME,
        }
    }
}

impl From<OperationKind> for TargetKind {
    fn from(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Query => Self::Query,
            OperationKind::Mutation => Self::Mutation,
            OperationKind::Subscription => Self::Subscription,
        }
    }
}

/// Identifier of an explorer node: `"<kind>-<name>"`.
///
/// Anonymous definitions use [`UNKNOWN_NAME`] as their name, and
/// definitions the explorer does not show map to `unknown-unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetIdentifier {
    pub kind: TargetKind,
    pub name: String,
}

impl TargetIdentifier {
    /// Classify a definition.
    #[must_use]
    pub fn for_definition(kind: &DefinitionKind) -> Self {
        let (target_kind, name) = match kind {
            DefinitionKind::Operation { operation, name } => {
                (TargetKind::from(*operation), name.as_deref())
            }
            DefinitionKind::Fragment { name } => (TargetKind::Fragment, name.as_deref()),
            DefinitionKind::Other => (TargetKind::Unknown, None),
        };

        Self {
            kind: target_kind,
            name: name.unwrap_or(UNKNOWN_NAME).to_string(),
        }
    }

    /// CSS selector of the matching node inside the explorer panel.
    #[must_use]
    pub fn explorer_selector(&self) -> String {
        format!("{EXPLORER_ROOT_SELECTOR} #{self}")
    }
}

impl std::fmt::Display for TargetIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.kind.as_str(), self.name)
    }
}
