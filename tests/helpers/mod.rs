//! Shared test infrastructure
//!
//! Tracing init plus settings and token builders used by the suite
//! integration tests.

use std::sync::Once;

use mentorprobe::config::Settings;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Settings pointed at a mock backend with the given suites selected
#[allow(dead_code)]
pub fn test_settings(base_url: &str, suites: &[&str]) -> Settings {
    init_test_env();

    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings.api.timeout_seconds = 5;
    settings.admin.email = "admin@onlymentors.ai".to_string();
    settings.admin.password = "probe-admin-password".to_string();
    settings.probe.suites = suites.iter().map(|s| s.to_string()).collect();
    settings
}

/// A signed admin bearer token with the given role and a future expiry
#[allow(dead_code)]
pub fn admin_token(role: &str) -> String {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let exp = (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp();
    let claims = serde_json::json!({
        "sub": "adm-1",
        "email": "admin@onlymentors.ai",
        "role": role,
        "exp": exp,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("failed to encode test token")
}
