//! API configuration parsed from environment variables.

use crate::error::StoreError;
use crate::paging::DEFAULT_ROWS;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_NEWS_PATH: &str = "/news";
pub const DEFAULT_COOPERATION_HOSPITAL_PATH: &str = "/cooperation_hospitals";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub news_path: String,
    pub cooperation_hospital_path: String,
    pub page_rows: u64,
    pub timeouts: ApiTimeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            news_path: DEFAULT_NEWS_PATH.to_owned(),
            cooperation_hospital_path: DEFAULT_COOPERATION_HOSPITAL_PATH.to_owned(),
            page_rows: DEFAULT_ROWS,
            timeouts: ApiTimeouts::default(),
        }
    }
}

impl ApiConfig {
    /// Build typed API config from environment variables.
    ///
    /// Optional:
    /// - `HOSPITAL_API_BASE_URL`: default `http://127.0.0.1:3000`
    /// - `HOSPITAL_NEWS_PATH`: default `/news`
    /// - `HOSPITAL_COOPERATION_HOSPITAL_PATH`: default `/cooperation_hospitals`
    /// - `HOSPITAL_PAGE_ROWS`: default 12
    /// - `HOSPITAL_REQUEST_TIMEOUT_SECS`: default 30
    /// - `HOSPITAL_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the base URL is set but empty.
    pub fn from_env() -> Result<Self, StoreError> {
        let base_url = normalize_base_url(
            &std::env::var("HOSPITAL_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned()),
        )?;
        let news_path = normalize_path(
            &std::env::var("HOSPITAL_NEWS_PATH").unwrap_or_else(|_| DEFAULT_NEWS_PATH.to_owned()),
        );
        let cooperation_hospital_path = normalize_path(
            &std::env::var("HOSPITAL_COOPERATION_HOSPITAL_PATH")
                .unwrap_or_else(|_| DEFAULT_COOPERATION_HOSPITAL_PATH.to_owned()),
        );
        let timeouts = ApiTimeouts {
            request_secs: env_parse_u64("HOSPITAL_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("HOSPITAL_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let page_rows = env_parse_u64("HOSPITAL_PAGE_ROWS", DEFAULT_ROWS);

        Ok(Self { base_url, news_path, cooperation_hospital_path, page_rows, timeouts })
    }

    /// Same config pointed at another server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .map_err(|_| ())
        .and_then(|v| v.trim().parse::<u64>().map_err(|_| ()))
        .unwrap_or(default)
}

fn normalize_base_url(raw: &str) -> Result<String, StoreError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(StoreError::Config("HOSPITAL_API_BASE_URL is empty".to_owned()));
    }
    Ok(trimmed.to_owned())
}

/// Ensure a leading `/` and no trailing one.
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    format!("/{trimmed}")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
