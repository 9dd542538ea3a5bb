//! Business portal probe suite
//!
//! Probes the B2B surface: portal configuration, employee signup with a
//! corporate-style address and login.

use std::time::Instant;

use reqwest::StatusCode;
use serde_json::json;
use tracing::info;

use crate::report::{CheckResult, ProbeReport};
use crate::services::api::{expect_status, ApiClient};
use crate::utils::helpers::{generate_random_string, throwaway_password};

const SUITE: &str = "business";

/// Probe suite for `/api/business/*`
pub struct BusinessSuite<'a> {
    client: &'a mut ApiClient,
    report: &'a mut ProbeReport,
    email: String,
    password: String,
}

impl<'a> BusinessSuite<'a> {
    pub fn new(client: &'a mut ApiClient, report: &'a mut ProbeReport) -> Self {
        client.clear_token();
        Self {
            client,
            report,
            email: format!("probe.{}@acme-corp.example", generate_random_string(10)),
            password: throwaway_password(),
        }
    }

    /// Run all business checks sequentially
    pub async fn run(mut self) {
        info!(email = %self.email, "Running business suite");

        let started = Instant::now();
        let outcome = self.check_config().await;
        self.report
            .record(SUITE, "config", "/api/business/config", started, outcome);

        let started = Instant::now();
        let outcome = self.check_signup().await;
        self.report
            .record(SUITE, "signup", "/api/business/signup", started, outcome);

        let started = Instant::now();
        let outcome = self.check_login().await;
        self.report
            .record(SUITE, "login", "/api/business/login", started, outcome);
    }

    async fn check_config(&mut self) -> CheckResult {
        let response = self
            .client
            .get("/api/business/config")
            .await
            .map_err(|e| e.to_string())?;

        expect_status(&response, StatusCode::OK, "/api/business/config").map_err(|e| e.to_string())
    }

    async fn check_signup(&mut self) -> CheckResult {
        let body = json!({
            "email": self.email,
            "password": self.password,
            "full_name": "Probe Employee",
            "company_name": "Acme Corp",
        });

        let response = self
            .client
            .post("/api/business/signup", &body)
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
        Ok(())
    }

    async fn check_login(&mut self) -> CheckResult {
        let body = json!({"email": self.email, "password": self.password});

        let response = self
            .client
            .post("/api/business/login", &body)
            .await
            .map_err(|e| e.to_string())?;

        expect_status(&response, StatusCode::OK, "/api/business/login").map_err(|e| e.to_string())
    }
}
