//! HTTP client for the Shotcut.in REST API.
//!
//! Handles Bearer authentication, query/body serialization, timeout
//! management, and the request/response lifecycle. Each invocation performs
//! exactly one HTTP exchange; retries are left to the caller.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use tracing::debug;

use sc_core::config::ClientConfig;
use sc_core::constants;
use sc_core::error::{ScError, ScResult};

use crate::response;

/// HTTP client for communicating with the Shotcut API.
///
/// Wraps `reqwest::Client` with Shotcut-specific authentication and error
/// handling. Holds no per-call mutable state, so a single instance (or a
/// cheap clone) can serve any number of concurrent calls.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Client,
    /// Root URL for the API (e.g. "https://shotcut.in/api").
    api_root: String,
    /// API key sent as a Bearer token on every request.
    api_key: String,
    /// Per-request timeout.
    timeout: Duration,
}

impl ApiClient {
    /// Create a new ApiClient from client configuration.
    ///
    /// Fails with `MissingConfig` if no API key is set.
    pub fn new(config: &ClientConfig) -> ScResult<Self> {
        if !config.is_configured() {
            return Err(ScError::MissingConfig("api_key is required".into()));
        }

        let timeout = Duration::from_millis(config.timeout_ms);
        let inner = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(constants::CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent(format!(
                "{}/{}",
                constants::CLIENT_NAME,
                constants::CLIENT_VERSION
            ))
            .build()
            .map_err(|e| ScError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            api_root: config.normalized_base_url(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    /// Get the current API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    /// Internal: build a request for the given method, path, query, and body.
    fn build_request<Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&serde_json::Value>,
    ) -> RequestBuilder
    where
        Q: Serialize + ?Sized,
    {
        let mut builder = self
            .inner
            .request(method, self.url(path))
            .timeout(self.timeout)
            .bearer_auth(&self.api_key);
        if let Some(q) = query {
            builder = builder.query(q);
        }
        if let Some(b) = body {
            builder = builder.json(b);
        }
        builder
    }

    /// Perform one HTTP exchange. No retry: a rate-limit or server error is
    /// reported to the caller as-is.
    async fn send<Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&serde_json::Value>,
    ) -> ScResult<Response>
    where
        Q: Serialize + ?Sized,
    {
        debug!("{} {}", method, path);
        self.build_request(method, path, query, body)
            .send()
            .await
            .map_err(Self::classify_error)
    }

    /// Execute a request and interpret the response into a JSON payload.
    pub(crate) async fn request<Q>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&serde_json::Value>,
    ) -> ScResult<serde_json::Value>
    where
        Q: Serialize + ?Sized,
    {
        let resp = self.send(method, path, query, body).await?;
        response::interpret(resp).await
    }

    // --- Public HTTP primitives ---

    /// Execute a GET request.
    pub async fn get(&self, path: &str) -> ScResult<serde_json::Value> {
        self.request::<()>(Method::GET, path, None, None).await
    }

    /// Execute a GET request with URL-encoded query parameters.
    pub async fn get_with<Q>(&self, path: &str, query: &Q) -> ScResult<serde_json::Value>
    where
        Q: Serialize + ?Sized,
    {
        self.request(Method::GET, path, Some(query), None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> ScResult<serde_json::Value> {
        self.request::<()>(Method::POST, path, None, Some(body)).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put(&self, path: &str, body: &serde_json::Value) -> ScResult<serde_json::Value> {
        self.request::<()>(Method::PUT, path, None, Some(body)).await
    }

    /// Execute a DELETE request.
    pub async fn delete(&self, path: &str) -> ScResult<serde_json::Value> {
        self.request::<()>(Method::DELETE, path, None, None).await
    }

    /// Classify a reqwest error into an ScError variant so callers can tell
    /// "could not reach the service" apart from "service rejected request".
    fn classify_error(e: reqwest::Error) -> ScError {
        if e.is_timeout() {
            ScError::Timeout(e.to_string())
        } else if e.is_connect() {
            ScError::Network(format!("connection failed: {e}"))
        } else {
            ScError::Network(e.to_string())
        }
    }
}
