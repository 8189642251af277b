//! HTTP transport with custom headers, timeouts and retries.

use crate::fetcher::{decode_introspection, Fetcher, GraphQLRequest};
use crate::types::IntrospectionResponse;
use crate::{IntrospectionError, Result};
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RETRIES: u32 = 0;

/// A configurable client for posting GraphQL requests.
///
/// ```no_run
/// use graphql_introspect::IntrospectionClient;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrospectionClient::new()
///     .with_header("Authorization", "Bearer my-token")
///     .with_timeout(Duration::from_secs(60))
///     .with_retries(3);
/// let response = client.execute("https://api.example.com/graphql").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntrospectionClient {
    headers: HashMap<String, String>,
    timeout: Duration,
    connect_timeout: Duration,
    retries: u32,
}

impl Default for IntrospectionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionClient {
    /// 30 second request timeout, 10 second connect timeout, no retries
    /// and no custom headers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HashMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Maximum time for the whole request, connection included.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Retries use exponential backoff starting at 1 second.
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Bind the client to an endpoint, producing a [`Fetcher`].
    #[must_use]
    pub fn fetcher(self, url: impl Into<String>) -> HttpFetcher {
        HttpFetcher {
            url: url.into(),
            client: self,
        }
    }

    /// Run the introspection query against `url` and decode the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails after all retry attempts, the
    /// server answers with an HTTP error status, or the body is not a valid
    /// introspection result.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, url: &str) -> Result<IntrospectionResponse> {
        let body = self.post(url, &GraphQLRequest::introspection()).await?;
        decode_introspection(body)
    }

    /// POST `request` to `url`, retrying retryable failures.
    ///
    /// # Errors
    ///
    /// Returns the last error once attempts are exhausted, or the first
    /// error that is not worth retrying.
    pub async fn post(&self, url: &str, request: &GraphQLRequest) -> Result<serde_json::Value> {
        let mut last_error = None;
        let attempts = self.retries + 1;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = Duration::from_secs(1 << (attempt - 1)); // 1s, 2s, 4s, ...
                tracing::info!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            match self.post_once(url, request).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Request failed");
                    let retryable = e.is_retryable();
                    last_error = Some(e);
                    if !retryable {
                        break;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| IntrospectionError::Network("No attempts made".to_string())))
    }

    async fn post_once(&self, url: &str, body: &GraphQLRequest) -> Result<serde_json::Value> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| {
                IntrospectionError::Network(format!("Failed to create HTTP client: {e}"))
            })?;

        let mut request = client.post(url).header("Content-Type", "application/json");
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        tracing::debug!(operation = ?body.operation_name, "Sending GraphQL request");
        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %error_body, "HTTP error response");
            return Err(IntrospectionError::Http(status.as_u16(), error_body));
        }

        response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Response body is not JSON");
            IntrospectionError::Parse(e.to_string())
        })
    }
}

/// An [`IntrospectionClient`] bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    url: String,
    client: IntrospectionClient,
}

impl HttpFetcher {
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: GraphQLRequest) -> Result<serde_json::Value> {
        self.client.post(&self.url, &request).await
    }
}
