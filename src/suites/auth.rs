//! User authentication probe suite
//!
//! Exercises signup, login and the password-reset flow with a throwaway
//! identity, including the negative paths (duplicate signup, wrong
//! password, bogus reset token).

use std::time::Instant;

use regex::Regex;
use reqwest::StatusCode;
use serde_json::json;
use tracing::info;

use crate::report::{CheckResult, ProbeReport};
use crate::services::api::ApiClient;
use crate::utils::helpers::{throwaway_email, throwaway_password};
use crate::utils::logging::log_auth_event;

const SUITE: &str = "auth";

/// Probe suite for `/api/auth/*`
pub struct AuthSuite<'a> {
    client: &'a mut ApiClient,
    report: &'a mut ProbeReport,
    email: String,
    password: String,
    full_name: String,
    reset_token: Option<String>,
}

impl<'a> AuthSuite<'a> {
    pub fn new(client: &'a mut ApiClient, report: &'a mut ProbeReport) -> Self {
        client.clear_token();
        Self {
            client,
            report,
            email: throwaway_email("auth"),
            password: throwaway_password(),
            full_name: "Probe User".to_string(),
            reset_token: None,
        }
    }

    /// Run all auth checks sequentially
    pub async fn run(mut self) {
        info!(email = %self.email, "Running auth suite");

        let started = Instant::now();
        let outcome = self.check_signup().await;
        self.report
            .record(SUITE, "signup", "/api/auth/signup", started, outcome);

        let started = Instant::now();
        let outcome = self.check_duplicate_signup().await;
        self.report
            .record(SUITE, "duplicate_signup", "/api/auth/signup", started, outcome);

        let started = Instant::now();
        let outcome = self.check_login().await;
        self.report
            .record(SUITE, "login", "/api/auth/login", started, outcome);

        let started = Instant::now();
        let outcome = self.check_login_wrong_password().await;
        self.report.record(
            SUITE,
            "login_wrong_password",
            "/api/auth/login",
            started,
            outcome,
        );

        let started = Instant::now();
        let outcome = self.check_forgot_password().await;
        self.report.record(
            SUITE,
            "forgot_password",
            "/api/auth/forgot-password",
            started,
            outcome,
        );

        let started = Instant::now();
        let outcome = self.check_validate_reset_token().await;
        self.report.record(
            SUITE,
            "validate_reset_token",
            "/api/auth/validate-reset-token",
            started,
            outcome,
        );

        let started = Instant::now();
        let outcome = self.check_reset_password().await;
        self.report.record(
            SUITE,
            "reset_password",
            "/api/auth/reset-password",
            started,
            outcome,
        );
    }

    async fn check_signup(&mut self) -> CheckResult {
        let body = json!({
            "email": self.email,
            "password": self.password,
            "full_name": self.full_name,
        });

        let response = self
            .client
            .post("/api/auth/signup", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let token = response
            .str_field("token")
            .ok_or("response missing token")?
            .to_string();
        self.client.set_token(token);
        log_auth_event(&self.email, "signup", true, None);

        Ok(())
    }

    async fn check_duplicate_signup(&mut self) -> CheckResult {
        let body = json!({
            "email": self.email,
            "password": self.password,
            "full_name": self.full_name,
        });

        let response = self
            .client
            .post("/api/auth/signup", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::BAD_REQUEST {
            return Err(format!(
                "duplicate signup should be rejected with 400, got {}",
                response.status
            ));
        }

        Ok(())
    }

    async fn check_login(&mut self) -> CheckResult {
        let body = json!({"email": self.email, "password": self.password});

        let response = self
            .client
            .post("/api/auth/login", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let token = response
            .str_field("token")
            .ok_or("response missing token")?
            .to_string();
        self.client.set_token(token);
        log_auth_event(&self.email, "login", true, None);

        Ok(())
    }

    async fn check_login_wrong_password(&mut self) -> CheckResult {
        let body = json!({"email": self.email, "password": "definitely-wrong"});

        let response = self
            .client
            .post("/api/auth/login", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::UNAUTHORIZED {
            return Err(format!(
                "wrong password should be rejected with 401, got {}",
                response.status
            ));
        }
        log_auth_event(&self.email, "login", false, Some("rejected as expected"));

        Ok(())
    }

    async fn check_forgot_password(&mut self) -> CheckResult {
        let body = json!({"email": self.email});

        let response = self
            .client
            .post("/api/auth/forgot-password", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        // Preview deployments return the reset link in the response body.
        if let Some(link) = response.str_field("reset_link") {
            self.reset_token = extract_reset_token(link);
        }

        Ok(())
    }

    async fn check_validate_reset_token(&mut self) -> CheckResult {
        match self.reset_token.clone() {
            Some(token) => {
                let body = json!({"token": token});
                let response = self
                    .client
                    .post("/api/auth/validate-reset-token", &body)
                    .await
                    .map_err(|e| e.to_string())?;

                if response.status != StatusCode::OK {
                    return Err(format!(
                        "captured reset token should validate with 200, got {}",
                        response.status
                    ));
                }
                Ok(())
            }
            None => {
                let body = json!({"token": "invalid-token-123"});
                let response = self
                    .client
                    .post("/api/auth/validate-reset-token", &body)
                    .await
                    .map_err(|e| e.to_string())?;

                if response.status != StatusCode::BAD_REQUEST {
                    return Err(format!(
                        "bogus reset token should be rejected with 400, got {}",
                        response.status
                    ));
                }
                Ok(())
            }
        }
    }

    async fn check_reset_password(&mut self) -> CheckResult {
        let new_password = throwaway_password();

        match self.reset_token.clone() {
            Some(token) => {
                let body = json!({"token": token, "new_password": new_password});
                let response = self
                    .client
                    .post("/api/auth/reset-password", &body)
                    .await
                    .map_err(|e| e.to_string())?;

                if response.status != StatusCode::OK {
                    return Err(format!("expected 200, got {}", response.status));
                }
                Ok(())
            }
            None => {
                let body = json!({"token": "invalid-token-123", "new_password": new_password});
                let response = self
                    .client
                    .post("/api/auth/reset-password", &body)
                    .await
                    .map_err(|e| e.to_string())?;

                if response.status != StatusCode::BAD_REQUEST {
                    return Err(format!(
                        "bogus reset token should be rejected with 400, got {}",
                        response.status
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Pull the reset token out of a reset link's query string
fn extract_reset_token(link: &str) -> Option<String> {
    let pattern = Regex::new(r"[?&]token=([A-Za-z0-9._\-]+)").ok()?;
    pattern
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
