//! Shared HTTP client for the campaign backend.
//!
//! All requests go through this client so header handling and error mapping
//! stay in one place. The bearer token is read from the session per request,
//! so rotated tokens take effect immediately.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use adboard_core::auth::AccessTokenProviderTrait;
use adboard_core::errors::{Error, Result};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error body shapes the backend is known to produce.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    detail: Option<String>,
    error: Option<String>,
    message: Option<String>,
}

/// HTTP client for the campaign backend.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token_provider: Arc<dyn AccessTokenProviderTrait>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the backend (e.g. "http://localhost:8000")
    /// * `token_provider` - Source of the current access token, consulted on
    ///   every request
    pub fn new(base_url: &str, token_provider: Arc<dyn AccessTokenProviderTrait>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| Error::Http(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token_provider,
        })
    }

    /// Default headers, with `Authorization: Bearer` when a session exists.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.token_provider.access_token() {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| Error::Http(format!("Invalid access token format: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Ok(headers)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!("[api] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[api] POST {}", url);

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!("[api] PUT {}", url);

        let response = self
            .client
            .put(&url)
            .headers(self.headers()?)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        self.parse_response(response).await
    }

    /// DELETE returns an empty body on success, so only the status matters.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!("[api] DELETE {}", url);

        let response = self
            .client
            .delete(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, &body));
        }
        Ok(())
    }

    /// Parse an HTTP response, surfacing non-2xx statuses as API errors.
    async fn parse_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::Http(format!("Failed to parse response: {} - {}", e, body)))
    }

    /// Build an error from a non-2xx response, probing the body for the
    /// backend's message before falling back to a truncated dump.
    fn status_error(status: reqwest::StatusCode, body: &str) -> Error {
        if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
            if let Some(msg) = err.detail.or(err.error).or(err.message) {
                return Error::Api(format!("{} ({})", msg, status));
            }
        }
        Error::Api(format!(
            "HTTP {}: {}",
            status,
            body.chars().take(200).collect::<String>()
        ))
    }
}
