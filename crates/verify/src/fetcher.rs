//! Retrieval of raw dataset payloads.
//!
//! Payloads are returned undecoded; UTF-8 decoding happens in the parser.
//!
//! [`SourceFetcher`] is the seam between the pipeline and the network.
//! [`HttpFetcher`] implements it over [`reqwest`]; tests substitute an
//! in-memory implementation.

use std::time::Duration;

use async_trait::async_trait;

/// Longest response body excerpt kept in a [`FetchError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Errors from retrieving a dataset.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request itself failed (malformed locator, DNS, connection,
    /// timeout, body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status code.
    #[error("HTTP {status}: {body}")]
    Status {
        status: u16,
        /// Start of the response body, for diagnostics.
        body: String,
    },
}

/// Something that can turn a locator into the full payload it points at.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Retrieve the whole payload. Only a successful status yields `Ok`.
    async fn fetch_bytes(&self, locator: &str) -> Result<Vec<u8>, FetchError>;
}

/// [`SourceFetcher`] backed by a [`reqwest::Client`].
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with an optional per-request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Create a fetcher reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceFetcher for HttpFetcher {
    async fn fetch_bytes(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(locator).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
