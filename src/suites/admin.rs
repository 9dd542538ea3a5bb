//! Admin console probe suite
//!
//! Logs into the admin console with configured credentials, inspects the
//! issued token's claims, and walks the dashboard and management
//! endpoints. Mutating checks (suspend/delete/reset-password) only run
//! when `features.destructive_checks` is enabled.

use std::time::Instant;

use chrono::Utc;
use reqwest::StatusCode;
use serde_json::json;
use tracing::info;

use crate::config::Settings;
use crate::report::{CheckResult, ProbeReport};
use crate::services::api::ApiClient;
use crate::services::auth::decode_claims_unverified;
use crate::utils::logging::{log_admin_action, log_auth_event};

const SUITE: &str = "admin";

/// Probe suite for `/api/admin/*`
pub struct AdminSuite<'a> {
    client: &'a mut ApiClient,
    report: &'a mut ProbeReport,
    email: String,
    password: String,
    destructive: bool,
    admin_id: Option<String>,
    user_id: Option<String>,
    mentor_id: Option<String>,
}

impl<'a> AdminSuite<'a> {
    pub fn new(client: &'a mut ApiClient, report: &'a mut ProbeReport, settings: &Settings) -> Self {
        client.clear_token();
        Self {
            client,
            report,
            email: settings.admin.email.clone(),
            password: settings.admin.password.clone(),
            destructive: settings.features.destructive_checks,
            admin_id: None,
            user_id: None,
            mentor_id: None,
        }
    }

    /// Run all admin checks sequentially
    pub async fn run(mut self) {
        info!(email = %self.email, destructive = self.destructive, "Running admin suite");

        let started = Instant::now();
        let outcome = self.check_login().await;
        self.report
            .record(SUITE, "login", "/api/admin/login", started, outcome);

        let started = Instant::now();
        let outcome = self.check_dashboard_requires_auth().await;
        self.report.record(
            SUITE,
            "dashboard_requires_auth",
            "/api/admin/dashboard",
            started,
            outcome,
        );

        let started = Instant::now();
        let outcome = self.check_dashboard().await;
        self.report
            .record(SUITE, "dashboard", "/api/admin/dashboard", started, outcome);

        let started = Instant::now();
        let outcome = self.check_list_users().await;
        self.report
            .record(SUITE, "list_users", "/api/admin/users", started, outcome);

        let started = Instant::now();
        let outcome = self.check_list_mentors().await;
        self.report
            .record(SUITE, "list_mentors", "/api/admin/mentors", started, outcome);

        if self.destructive {
            let started = Instant::now();
            let outcome = self.check_suspend_mentor().await;
            self.report.record(
                SUITE,
                "suspend_mentor",
                "/api/admin/mentors/{id}/suspend",
                started,
                outcome,
            );

            let started = Instant::now();
            let outcome = self.check_reset_user_password().await;
            self.report.record(
                SUITE,
                "reset_user_password",
                "/api/admin/users/{id}/reset-password",
                started,
                outcome,
            );

            let started = Instant::now();
            let outcome = self.check_delete_mentor().await;
            self.report.record(
                SUITE,
                "delete_mentor",
                "/api/admin/mentors/{id}",
                started,
                outcome,
            );
        }
    }

    async fn check_login(&mut self) -> CheckResult {
        let body = json!({"email": self.email, "password": self.password});

        let response = self
            .client
            .post("/api/admin/login", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let token = response
            .str_field("token")
            .ok_or("response missing token")?
            .to_string();

        let claims = decode_claims_unverified(&token)
            .map_err(|e| format!("token claims undecodable: {}", e))?;

        if claims.admin_role().is_none() {
            return Err(format!("token carries unknown role: {:?}", claims.role));
        }
        if !claims.valid_at(Utc::now()) {
            return Err("token is already expired".to_string());
        }

        self.admin_id = claims.sub;
        self.client.set_token(token);
        log_auth_event(&self.email, "admin_login", true, None);
        Ok(())
    }

    async fn check_dashboard_requires_auth(&mut self) -> CheckResult {
        let saved = self.client.token().map(str::to_string);
        self.client.clear_token();

        let result = self
            .client
            .get("/api/admin/dashboard")
            .await
            .map_err(|e| e.to_string());

        if let Some(token) = saved {
            self.client.set_token(token);
        }

        let response = result?;
        if response.status != StatusCode::UNAUTHORIZED && response.status != StatusCode::FORBIDDEN {
            return Err(format!(
                "unauthenticated dashboard access should be rejected, got {}",
                response.status
            ));
        }

        Ok(())
    }

    async fn check_dashboard(&mut self) -> CheckResult {
        let response = self
            .client
            .get("/api/admin/dashboard")
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        for field in ["total_users", "total_mentors"] {
            if response.field(field).is_none() {
                return Err(format!("dashboard response missing {}", field));
            }
        }

        Ok(())
    }

    async fn check_list_users(&mut self) -> CheckResult {
        let response = self
            .client
            .get("/api/admin/users")
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let users = response
            .array_field("users")
            .ok_or("response missing users array")?;

        self.user_id = users
            .first()
            .and_then(|u| u.get("user_id"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(())
    }

    async fn check_list_mentors(&mut self) -> CheckResult {
        let response = self
            .client
            .get("/api/admin/mentors")
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let mentors = response
            .array_field("mentors")
            .ok_or("response missing mentors array")?;

        self.mentor_id = mentors
            .first()
            .and_then(|m| m.get("mentor_id"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(())
    }

    async fn check_suspend_mentor(&mut self) -> CheckResult {
        let mentor_id = self
            .mentor_id
            .clone()
            .ok_or("no mentor available to suspend")?;
        let path = format!("/api/admin/mentors/{}/suspend", mentor_id);
        let body = json!({"reason": "smoke-test suspension"});

        let response = self
            .client
            .put(&path, &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        log_admin_action(
            self.admin_id.as_deref().unwrap_or("unknown"),
            "suspend",
            Some(&mentor_id),
            Some("probe-initiated"),
        );
        Ok(())
    }

    async fn check_reset_user_password(&mut self) -> CheckResult {
        let user_id = self
            .user_id
            .clone()
            .ok_or("no user available for password reset")?;
        let path = format!("/api/admin/users/{}/reset-password", user_id);

        let response = self
            .client
            .post(&path, &json!({}))
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        log_admin_action(
            self.admin_id.as_deref().unwrap_or("unknown"),
            "reset_password",
            Some(&user_id),
            Some("probe-initiated"),
        );
        Ok(())
    }

    async fn check_delete_mentor(&mut self) -> CheckResult {
        let mentor_id = self
            .mentor_id
            .clone()
            .ok_or("no mentor available to delete")?;
        let path = format!("/api/admin/mentors/{}", mentor_id);

        let response = self.client.delete(&path).await.map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        log_admin_action(
            self.admin_id.as_deref().unwrap_or("unknown"),
            "delete",
            Some(&mentor_id),
            Some("probe-initiated"),
        );
        Ok(())
    }
}
