use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("Failed to parse introspection response: {0}")]
    Parse(String),

    /// The response was well-formed but cannot describe a schema, e.g. the
    /// server answered with GraphQL errors only.
    #[error("Invalid introspection response: {0}")]
    Invalid(String),
}

impl IntrospectionError {
    /// Network errors and 5xx server errors are worth another attempt.
    /// Parse errors, 4xx client errors and invalid responses are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Http(status, _) => *status >= 500,
            Self::Parse(_) | Self::Invalid(_) => false,
        }
    }
}
