//! The transport seam between the workbench and a GraphQL server.

use crate::types::IntrospectionResponse;
use crate::{
    ClientSchema, IntrospectionError, Result, INTROSPECTION_OPERATION_NAME, INTROSPECTION_QUERY,
};
use serde::Serialize;
use std::future::Future;

/// Body of a GraphQL-over-HTTP POST request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQLRequest {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    #[must_use]
    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    #[must_use]
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// The request used to load the explorer's schema.
    #[must_use]
    pub fn introspection() -> Self {
        Self::new(INTROSPECTION_QUERY).with_operation_name(INTROSPECTION_OPERATION_NAME)
    }
}

/// Executes GraphQL requests and yields the raw JSON response body.
///
/// Implemented over HTTP by [`crate::HttpFetcher`]; tests substitute
/// canned responses.
pub trait Fetcher {
    fn fetch(
        &self,
        request: GraphQLRequest,
    ) -> impl Future<Output = Result<serde_json::Value>> + Send;
}

/// Decode a raw response body into an introspection result.
///
/// A body carrying GraphQL `errors` and no `data` is reported as
/// [`IntrospectionError::Invalid`] with the error messages joined.
///
/// # Errors
///
/// Returns [`IntrospectionError::Invalid`] for error-only responses and
/// [`IntrospectionError::Parse`] when the body does not match the
/// introspection shape.
pub fn decode_introspection(body: serde_json::Value) -> Result<IntrospectionResponse> {
    let has_data = body.get("data").is_some_and(|data| !data.is_null());
    if !has_data {
        let messages: Vec<&str> = body
            .get("errors")
            .and_then(serde_json::Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|error| error.get("message").and_then(serde_json::Value::as_str))
            .collect();
        if !messages.is_empty() {
            return Err(IntrospectionError::Invalid(messages.join("; ")));
        }
    }

    serde_json::from_value(body).map_err(|e| IntrospectionError::Parse(e.to_string()))
}

/// Run the introspection query through `fetcher` and build the schema.
///
/// # Errors
///
/// Propagates transport failures from the fetcher, and decoding or schema
/// construction failures from the response.
#[tracing::instrument(skip(fetcher))]
pub async fn fetch_client_schema<F: Fetcher>(fetcher: &F) -> Result<ClientSchema> {
    let body = fetcher.fetch(GraphQLRequest::introspection()).await?;
    let response = decode_introspection(body)?;
    tracing::info!(
        types = response.data.schema.types.len(),
        directives = response.data.schema.directives.len(),
        "Introspection successful"
    );
    ClientSchema::from_introspection(response)
}
