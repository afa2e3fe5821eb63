//! Transport seam between a store and the REST API.
//!
//! DESIGN
//! ======
//! Stores depend on `Arc<dyn Transport>` rather than an HTTP client, so the
//! same store drives `HttpTransport` in production and `ScriptedTransport`
//! in tests. A transport returns the raw JSON body; shaping it into a
//! settlement happens in `envelope`, never inside the reducer.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use reqwest::Method;

use crate::error::StoreError;

/// One outbound request, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    #[must_use]
    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Sends requests and returns the success body as JSON.
///
/// A transport performs exactly one attempt per call. Empty success bodies
/// come back as `Value::Null`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`StoreError::Transport`] when the request never completes,
    /// [`StoreError::Status`] for non-success responses, and
    /// [`StoreError::Decode`] when the body is not JSON.
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, StoreError>;
}

/// Join a base path and a record id into `{base}/{id}`.
#[must_use]
pub fn item_path(base: &str, id: &impl std::fmt::Display) -> String {
    format!("{}/{id}", base.trim_end_matches('/'))
}
