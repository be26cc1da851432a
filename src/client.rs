//! Core HTTP client for the brokerage REST API.
//!
//! The [`BrokerClient`] struct wraps [`reqwest::Client`] with bearer-token
//! authentication and provides typed `get`/`post` methods. Endpoint methods
//! are added via `impl` blocks in the [`crate::api`] module, which also
//! implement the collaborator traits from [`crate::providers`].
//!
//! The client is an explicitly constructed, injectable handle — there is no
//! global broker state, and token lifecycle (refresh, storage) belongs to
//! the caller.

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::API_BASE_URL;
use crate::error::{Result, TriggerError};

/// Authenticated HTTP client for the brokerage REST API.
///
/// Wraps [`reqwest::Client`] and injects the bearer token into every
/// request. The header value is cached at construction time to avoid
/// per-request allocation.
///
/// # Example
///
/// ```no_run
/// use vertical_trigger::client::BrokerClient;
///
/// let client = BrokerClient::new("account-id", "access-token");
/// ```
#[derive(Debug, Clone)]
pub struct BrokerClient {
    http: reqwest::Client,
    /// Brokerage account the orders are placed against.
    account_id: String,
    /// OAuth access token.
    access_token: String,
    /// Base URL for REST API requests (defaults to [`API_BASE_URL`]).
    base_url: String,
    /// Pre-built `Authorization` header value.
    auth_header: HeaderValue,
}

impl BrokerClient {
    /// Create a new `BrokerClient` with the given account ID and access
    /// token, pointing at the default API base URL.
    pub fn new(account_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_base_url(account_id, access_token, API_BASE_URL)
    }

    /// Create a new `BrokerClient` pointing at a custom base URL.
    ///
    /// Useful for testing against a sandbox or mock server.
    pub fn with_base_url(
        account_id: impl Into<String>,
        access_token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .build()
            .expect("failed to build reqwest client");

        let access_token = access_token.into();
        let auth_header = HeaderValue::from_str(&format!("Bearer {access_token}"))
            .expect("access token contains invalid header characters");

        Self {
            http,
            account_id: account_id.into(),
            access_token,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            auth_header,
        }
    }

    /// Returns the brokerage account ID.
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Returns the current access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Replace the access token (e.g. after renewal).
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
        self.auth_header = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .expect("access token contains invalid header characters");
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Perform a GET request and deserialize the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a POST request with a JSON body and deserialize the response.
    pub async fn post<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let resp = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;

        self.handle_response(resp).await
    }

    /// Perform a POST request that returns no body (expects 201 Created).
    pub async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        tracing::debug!(%url, "POST (no content)");

        let resp = self
            .http
            .post(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(TriggerError::HttpStatus { status, body })
        }
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Build the full URL from a path segment.
    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Per-request auth headers. Uses the cached [`HeaderValue`] — only the
    /// [`HeaderMap`] container is allocated per call.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(header::AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Read a response, returning either the deserialized body or a
    /// [`TriggerError`].
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(TriggerError::Json)
        } else {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            Err(TriggerError::HttpStatus { status, body })
        }
    }
}
