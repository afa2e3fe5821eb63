//! Store error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Errors never escape a store operation. They are captured into the state's
//! `error` field, so every variant is `Clone` and carries the failure payload
//! verbatim (status plus raw body for server-reported failures).

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced while issuing a request or adapting its response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The request never reached the server or never returned.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: serde_json::Value },

    /// Request fields could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// A success body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// A configuration value is missing or unusable.
    #[error("config error: {0}")]
    Config(String),
}

impl StoreError {
    /// Stable machine-readable code for UI branching and logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::Status { .. } => "E_STATUS",
            Self::Encode(_) => "E_ENCODE",
            Self::Decode(_) => "E_DECODE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Config(_) => "E_CONFIG",
        }
    }

    /// Whether reissuing the same request could plausibly succeed.
    /// The store itself never retries.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
