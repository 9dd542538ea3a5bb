//! Creator (mentor) onboarding probe suite
//!
//! Walks the creator signup/login flow and the onboarding submissions
//! (banking details, identity verification) with a throwaway identity.

use std::time::Instant;

use reqwest::StatusCode;
use serde_json::json;
use tracing::info;

use crate::report::{CheckResult, ProbeReport};
use crate::services::api::ApiClient;
use crate::utils::helpers::{generate_random_string, throwaway_email, throwaway_password};

const SUITE: &str = "creators";

/// Probe suite for `/api/creators/*`
pub struct CreatorSuite<'a> {
    client: &'a mut ApiClient,
    report: &'a mut ProbeReport,
    email: String,
    password: String,
    account_name: String,
    creator_id: Option<String>,
}

impl<'a> CreatorSuite<'a> {
    pub fn new(client: &'a mut ApiClient, report: &'a mut ProbeReport) -> Self {
        client.clear_token();
        Self {
            client,
            report,
            email: throwaway_email("creator"),
            password: throwaway_password(),
            account_name: format!("probe-mentor-{}", generate_random_string(8)),
            creator_id: None,
        }
    }

    /// Run all creator checks sequentially
    pub async fn run(mut self) {
        info!(email = %self.email, "Running creators suite");

        let started = Instant::now();
        let outcome = self.check_signup().await;
        self.report
            .record(SUITE, "signup", "/api/creators/signup", started, outcome);

        let started = Instant::now();
        let outcome = self.check_login().await;
        self.report
            .record(SUITE, "login", "/api/creators/login", started, outcome);

        let started = Instant::now();
        let outcome = self.check_banking().await;
        self.report.record(
            SUITE,
            "banking",
            "/api/creators/{id}/banking",
            started,
            outcome,
        );

        let started = Instant::now();
        let outcome = self.check_id_verification().await;
        self.report.record(
            SUITE,
            "id_verification",
            "/api/creators/{id}/id-verification",
            started,
            outcome,
        );
    }

    async fn check_signup(&mut self) -> CheckResult {
        let body = json!({
            "email": self.email,
            "password": self.password,
            "full_name": "Probe Creator",
            "account_name": self.account_name,
            "category": "business",
            "monthly_price_cents": 999,
        });

        let response = self
            .client
            .post("/api/creators/signup", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let token = response
            .str_field("token")
            .ok_or("response missing token")?
            .to_string();
        self.creator_id = response.str_field("creator_id").map(str::to_string);
        self.client.set_token(token);

        if self.creator_id.is_none() {
            return Err("response missing creator_id".to_string());
        }
        Ok(())
    }

    async fn check_login(&mut self) -> CheckResult {
        let body = json!({"email": self.email, "password": self.password});

        let response = self
            .client
            .post("/api/creators/login", &body)
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

    async fn check_banking(&mut self) -> CheckResult {
        let creator_id = self
            .creator_id
            .clone()
            .ok_or("no creator id captured from signup")?;
        let path = format!("/api/creators/{}/banking", creator_id);
        let body = json!({
            "bank_name": "Probe National Bank",
            "account_holder": "Probe Creator",
            "account_number": "000123456789",
            "routing_number": "110000000",
        });

        let response = self
            .client
            .post(&path, &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }
        Ok(())
    }

    async fn check_id_verification(&mut self) -> CheckResult {
        let creator_id = self
            .creator_id
            .clone()
            .ok_or("no creator id captured from signup")?;
        let path = format!("/api/creators/{}/id-verification", creator_id);
        let body = json!({
            "document_type": "passport",
            "document_number": format!("P{}", generate_random_string(8)),
        });

        let response = self
            .client
            .post(&path, &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }
        Ok(())
    }
}
