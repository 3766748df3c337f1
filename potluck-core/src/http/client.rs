//! HTTP client trait and implementations.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::HttpError;

const USER_AGENT: &str = "potluck/0.1";

/// Trait for HTTP clients, enabling mockability in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET a URL and return the response body as text.
    ///
    /// Non-success statuses are errors; bodies of error responses are
    /// discarded.
    async fn get(&self, url: &str) -> Result<String, HttpError>;
}

/// Production HTTP client backed by reqwest.
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        tracing::debug!(url, "network: fetching");
        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = %status, "network: request failed");
            return Err(HttpError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        tracing::debug!(url, status = %status, "network: fetched successfully");
        Ok(body)
    }
}

/// Canned response for [`MockClient`].
#[derive(Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16),
    Unreachable(String),
}

/// Mock HTTP client for testing, keyed by exact URL.
pub struct MockClient {
    responses: HashMap<String, MockResponse>,
}

impl MockClient {
    /// Create a new empty mock client.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
        }
    }

    /// Add a response for a URL.
    pub fn with_response(mut self, url: &str, response: MockResponse) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }

    /// Add a successful body for a URL.
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.with_response(url, MockResponse::Body(body.to_string()))
    }

    /// Add a non-success HTTP status for a URL.
    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.with_response(url, MockResponse::Status(status))
    }

    /// Add a transport-level failure for a URL.
    pub fn with_unreachable(self, url: &str, message: &str) -> Self {
        self.with_response(url, MockResponse::Unreachable(message.to_string()))
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get(&self, url: &str) -> Result<String, HttpError> {
        match self.responses.get(url) {
            Some(MockResponse::Body(body)) => Ok(body.clone()),
            Some(MockResponse::Status(status)) => Err(HttpError::Status(*status)),
            Some(MockResponse::Unreachable(message)) => {
                Err(HttpError::Unreachable(message.clone()))
            }
            None => Err(HttpError::Unreachable(format!(
                "no mock response for URL: {}",
                url
            ))),
        }
    }
}
