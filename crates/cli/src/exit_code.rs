//! Exit codes for the `graphiql` CLI.
//!
//! Scripts can tell a click that missed every definition apart from a
//! document that does not parse, a click outside the document, a missing
//! config or an unreachable server.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The click did not resolve to a definition
    LookupError = 1,
    /// Configuration error (missing or invalid config file)
    ConfigError = 2,
    /// Schema load error (introspection failed)
    SchemaError = 3,
    /// I/O error (file read failure)
    IoError = 4,
    /// The query document is not valid GraphQL
    ParseError = 5,
    /// The requested click position does not exist in the document
    InvalidPosition = 6,
}

impl ExitCode {
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LookupError => write!(f, "lookup error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema load error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
            Self::InvalidPosition => write!(f, "invalid position"),
        }
    }
}
