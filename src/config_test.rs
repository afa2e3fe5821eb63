use super::*;

/// # Safety
/// Only `from_env_defaults_and_overrides` touches these variables.
unsafe fn clear_api_env() {
    unsafe {
        std::env::remove_var("HOSPITAL_API_BASE_URL");
        std::env::remove_var("HOSPITAL_NEWS_PATH");
        std::env::remove_var("HOSPITAL_COOPERATION_HOSPITAL_PATH");
        std::env::remove_var("HOSPITAL_PAGE_ROWS");
        std::env::remove_var("HOSPITAL_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("HOSPITAL_CONNECT_TIMEOUT_SECS");
    }
}

// Env mutation is process-wide; keep every env assertion in one test so the
// default parallel runner cannot interleave them.
#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_api_env() };

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg, ApiConfig::default());

    unsafe {
        std::env::set_var("HOSPITAL_API_BASE_URL", "https://hospital.example/api/");
        std::env::set_var("HOSPITAL_NEWS_PATH", "articles/");
        std::env::set_var("HOSPITAL_COOPERATION_HOSPITAL_PATH", "/partners");
        std::env::set_var("HOSPITAL_PAGE_ROWS", "20");
        std::env::set_var("HOSPITAL_REQUEST_TIMEOUT_SECS", "5");
        std::env::set_var("HOSPITAL_CONNECT_TIMEOUT_SECS", "not-a-number");
    }

    let cfg = ApiConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, "https://hospital.example/api");
    assert_eq!(cfg.news_path, "/articles");
    assert_eq!(cfg.cooperation_hospital_path, "/partners");
    assert_eq!(cfg.page_rows, 20);
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 5, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS });

    unsafe { std::env::set_var("HOSPITAL_API_BASE_URL", "  / ") };
    let err = ApiConfig::from_env().unwrap_err();
    assert!(matches!(err, StoreError::Config(_)));

    unsafe { clear_api_env() };
}

#[test]
fn normalize_path_adds_leading_slash() {
    assert_eq!(normalize_path("news"), "/news");
    assert_eq!(normalize_path("/news/"), "/news");
}

#[test]
fn with_base_url_trims_trailing_slash() {
    let cfg = ApiConfig::default().with_base_url("http://localhost:8080/");
    assert_eq!(cfg.base_url, "http://localhost:8080");
}
