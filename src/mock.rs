//! In-memory transport double.
//!
//! `ScriptedTransport` replays queued responses in order and records every
//! request it receives, so store behavior can be exercised without a server.
//!
//! ```
//! use std::sync::Arc;
//! use hospital_board::mock::ScriptedTransport;
//!
//! let transport = Arc::new(ScriptedTransport::new());
//! transport.push_ok(serde_json::json!([]));
//! assert_eq!(transport.pending(), 1);
//! ```

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;
use crate::transport::{ApiRequest, Transport};

#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<serde_json::Value, StoreError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success body.
    pub fn push_ok(&self, body: serde_json::Value) {
        self.push(Ok(body));
    }

    /// Queue a failure.
    pub fn push_err(&self, error: StoreError) {
        self.push(Err(error));
    }

    /// Requests received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Responses still queued.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn push(&self, response: Result<serde_json::Value, StoreError>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<serde_json::Value, StoreError> {
        let summary = format!("{} {}", request.method, request.path);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err(StoreError::Transport(format!("no scripted response for {summary}"))))
    }
}
