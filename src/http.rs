//! reqwest-backed transport.
//!
//! Thin wrapper over one `reqwest::Client`. Timeouts come from
//! [`ApiTimeouts`]; nothing is retried. Response classification is split into
//! `classify_response` so it can be tested without a socket.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde_json::Value;
use tracing::trace;

use crate::config::{ApiConfig, ApiTimeouts};
use crate::error::StoreError;
use crate::transport::{ApiRequest, Transport};

pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the client cannot be built.
    pub fn new(base_url: &str, timeouts: ApiTimeouts) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// # Errors
    ///
    /// Returns [`StoreError::HttpClientBuild`] if the client cannot be built.
    pub fn from_config(config: &ApiConfig) -> Result<Self, StoreError> {
        Self::new(&config.base_url, config.timeouts)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, StoreError> {
        let url = self.url(&request.path);
        let mut builder = self.http.request(request.method, &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        trace!(%url, status, bytes = text.len(), "response received");

        classify_response(status, &text)
    }
}

/// Map a status and raw body to the transport result.
///
/// Success bodies must be JSON (empty means `null`). Failure bodies are kept
/// verbatim: parsed as JSON when possible, otherwise as a JSON string.
pub(crate) fn classify_response(status: u16, text: &str) -> Result<Value, StoreError> {
    let parsed = if text.trim().is_empty() { Ok(Value::Null) } else { serde_json::from_str::<Value>(text) };

    if (200..300).contains(&status) {
        parsed.map_err(|e| StoreError::Decode(e.to_string()))
    } else {
        let body = parsed.unwrap_or_else(|_| Value::String(text.to_owned()));
        Err(StoreError::Status { status, body })
    }
}
