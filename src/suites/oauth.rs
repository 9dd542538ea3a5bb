//! OAuth provider config probe suite
//!
//! Fetches the social-login provider configuration endpoints and checks
//! that each advertises a client id and a well-formed redirect URL.

use std::time::Instant;

use reqwest::StatusCode;
use tracing::info;
use url::Url;

use crate::report::{CheckResult, ProbeReport};
use crate::services::api::{expect_status, ApiClient, ApiResponse};

const SUITE: &str = "oauth";

/// Probe suite for `/api/auth/google/*` and `/api/auth/facebook/*`
pub struct OauthSuite<'a> {
    client: &'a mut ApiClient,
    report: &'a mut ProbeReport,
}

impl<'a> OauthSuite<'a> {
    pub fn new(client: &'a mut ApiClient, report: &'a mut ProbeReport) -> Self {
        client.clear_token();
        Self { client, report }
    }

    /// Run all OAuth checks sequentially
    pub async fn run(mut self) {
        info!("Running oauth suite");

        let started = Instant::now();
        let outcome = self.check_provider_config("/api/auth/google/config").await;
        self.report.record(
            SUITE,
            "google_config",
            "/api/auth/google/config",
            started,
            outcome,
        );

        let started = Instant::now();
        let outcome = self.check_provider_config("/api/auth/facebook/config").await;
        self.report.record(
            SUITE,
            "facebook_config",
            "/api/auth/facebook/config",
            started,
            outcome,
        );
    }

    async fn check_provider_config(&mut self, path: &str) -> CheckResult {
        let response = self.client.get(path).await.map_err(|e| e.to_string())?;

        expect_status(&response, StatusCode::OK, path).map_err(|e| e.to_string())?;

        validate_provider_config(&response)
    }
}

/// Check provider config shape: a client/app id plus a parseable redirect
fn validate_provider_config(response: &ApiResponse) -> CheckResult {
    let client_id = response
        .str_field("client_id")
        .or_else(|| response.str_field("app_id"))
        .ok_or("config missing client_id/app_id")?;

    if client_id.is_empty() {
        return Err("client id is empty".to_string());
    }

    let redirect = response
        .str_field("redirect_uri")
        .ok_or("config missing redirect_uri")?;

    Url::parse(redirect).map_err(|e| format!("redirect_uri does not parse: {}", e))?;
    Ok(())
}
