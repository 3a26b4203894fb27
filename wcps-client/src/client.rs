use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};
use wcps_query::{Expr, Query, QueryError};

use crate::config::ClientConfig;

/// Failure talking to the WCPS endpoint.
#[derive(Debug)]
pub enum TransportError {
    /// Connection-level failure: DNS, TLS, timeout, malformed URL.
    Request(reqwest::Error),
    /// The server answered with a non-2xx status.
    Status { status: u16, body: String },
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportError::Request(err) => write!(f, "Request failed: {}", err),
            TransportError::Status { status, body } => {
                write!(f, "Server returned HTTP {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for TransportError {}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Request(err)
    }
}

/// Failure of the generate-and-send path: either the query could not be
/// assembled or the transport rejected it.
#[derive(Debug)]
pub enum ClientError {
    Query(QueryError),
    Transport(TransportError),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Query(err) => write!(f, "{}", err),
            ClientError::Transport(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<QueryError> for ClientError {
    fn from(err: QueryError) -> Self {
        ClientError::Query(err)
    }
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        ClientError::Transport(err)
    }
}

/// HTTP client for a WCPS endpoint.
///
/// Queries go out as form-encoded POSTs (`query=<text>`); responses come
/// back as raw bytes in whatever encoding the query requested (CSV text,
/// PNG image, ...).
pub struct WcpsClient {
    client: Client,
    endpoint: String,
}

impl WcpsClient {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Send a finished query string, returning the raw response body.
    pub async fn send(&self, query: &str) -> Result<Vec<u8>, TransportError> {
        debug!(endpoint = %self.endpoint, query_len = query.len(), "Sending WCPS query");

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[("query", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(status = %status, %body, "WCPS query rejected");
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body.to_vec())
    }

    /// Assemble the query text from a builder and root expression, then
    /// send it.
    pub async fn execute(
        &self,
        query: &Query,
        root: impl Into<Expr>,
    ) -> Result<Vec<u8>, ClientError> {
        let text = query.generate(root)?;
        Ok(self.send(&text).await?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
