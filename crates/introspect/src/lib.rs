//! GraphQL introspection for the schema explorer.
//!
//! The workbench never talks HTTP directly. It hands a [`GraphQLRequest`] to
//! a [`Fetcher`] and gets raw JSON back; [`fetch_client_schema`] layers the
//! introspection query and [`ClientSchema`] construction on top of that.
//! [`IntrospectionClient`] is the production transport.
//!
//! ```no_run
//! use graphql_introspect::{fetch_client_schema, IntrospectionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = IntrospectionClient::new()
//!         .with_header("Authorization", "Bearer my-token")
//!         .fetcher("https://api.example.com/graphql");
//!     let schema = fetch_client_schema(&fetcher).await?;
//!     for name in schema.type_names() {
//!         println!("{name}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod fetcher;
mod query;
mod schema;
mod types;

pub use client::{HttpFetcher, IntrospectionClient};
pub use error::{IntrospectionError, Result};
pub use fetcher::{decode_introspection, fetch_client_schema, Fetcher, GraphQLRequest};
pub use query::{INTROSPECTION_OPERATION_NAME, INTROSPECTION_QUERY};
pub use schema::ClientSchema;
pub use types::{
    IntrospectionData, IntrospectionDirective, IntrospectionEnumValue, IntrospectionField,
    IntrospectionInputValue, IntrospectionResponse, IntrospectionSchema, IntrospectionType,
    NamedTypeRef, TypeKind, TypeRef,
};
