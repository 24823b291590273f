//! Bearer-authenticated JSON transport over `reqwest`.
//!
//! One client per API, built once with a fixed timeout. Requests are sent
//! once; there is no retry.
//!
//! Endpoints are given as path segments. Each segment is percent-encoded on
//! its own, so an id like `p1?x` or `a/../b` can never change which
//! endpoint a request reaches.

use reqwest::{RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur before a JSON body is in hand
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Invalid path segment: {0:?}")]
    InvalidSegment(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid JSON response (HTTP {status}): {message}")]
    InvalidBody { status: u16, message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connection(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// A parsed JSON body with the status it came with.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// HTTP transport for one API base URL and bearer token.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    token: String,
}

impl HttpTransport {
    pub fn new(
        base_url: impl AsRef<str>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let base_url = Url::parse(base_url.as_ref().trim_end_matches('/'))
            .map_err(|e| TransportError::Client(format!("invalid base URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(TransportError::Client(format!(
                "invalid base URL: {}",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("moltbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            token: token.into(),
        })
    }

    /// Absolute URL for an endpoint such as `["posts", id, "upvote"]`.
    ///
    /// Empty, `.` and `..` segments are rejected: the URL parser would
    /// drop or collapse them and the request would land elsewhere.
    pub fn url(&self, segments: &[&str]) -> Result<Url, TransportError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(TransportError::InvalidSegment(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::Client(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `GET` with query parameters.
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> Result<JsonResponse, TransportError> {
        let url = self.url(segments)?;
        let request = self.client.get(url.clone()).query(query);
        self.send("GET", &url, request).await
    }

    /// `POST` with a JSON body (`Content-Type: application/json`).
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<JsonResponse, TransportError> {
        let url = self.url(segments)?;
        let request = self.client.post(url.clone()).json(body);
        self.send("POST", &url, request).await
    }

    async fn send(
        &self,
        method: &str,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<JsonResponse, TransportError> {
        let endpoint = url.path();
        debug!("{} {}", method, endpoint);

        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body = serde_json::from_str(&text).map_err(|e| TransportError::InvalidBody {
            status: status.as_u16(),
            message: e.to_string(),
        })?;

        debug!("{} {} -> {}", method, endpoint, status);
        Ok(JsonResponse { status, body })
    }
}
