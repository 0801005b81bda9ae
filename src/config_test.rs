use super::*;

// =============================================================
// from_base_url
// =============================================================

#[test]
fn from_base_url_defaults_when_missing() {
    let cfg = ApiConfig::from_base_url(None);
    assert_eq!(cfg.base_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.request_timeout, Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS));
}

#[test]
fn from_base_url_defaults_when_blank() {
    let cfg = ApiConfig::from_base_url(Some("   "));
    assert_eq!(cfg.base_url, DEFAULT_BACKEND_URL);
}

#[test]
fn from_base_url_strips_trailing_slashes() {
    let cfg = ApiConfig::from_base_url(Some("https://lawchat.example.test//"));
    assert_eq!(cfg.base_url, "https://lawchat.example.test");
}

// =============================================================
// endpoint / timeout
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    let cfg = ApiConfig::from_base_url(Some("https://api.test/"));
    assert_eq!(cfg.endpoint("/api/chat/"), "https://api.test/api/chat/");
}

#[test]
fn timeout_ms_matches_fixed_ceiling() {
    let cfg = ApiConfig::from_base_url(None);
    assert_eq!(cfg.timeout_ms(), 30_000);
}

#[test]
fn timeout_ms_saturates_for_huge_durations() {
    let cfg = ApiConfig { base_url: DEFAULT_BACKEND_URL.to_owned(), request_timeout: Duration::from_secs(u64::MAX / 4) };
    assert_eq!(cfg.timeout_ms(), u32::MAX);
}
