//! Marketplace content probe suite
//!
//! Probes the public marketplace surface: category listing, mentor
//! search (with tier consistency checks) and question submission as a
//! freshly signed-up user.

use std::time::Instant;

use reqwest::StatusCode;
use serde_json::json;
use tracing::info;

use crate::models::MentorTier;
use crate::report::{CheckResult, ProbeReport};
use crate::services::api::ApiClient;
use crate::utils::helpers::{throwaway_email, throwaway_password};

const SUITE: &str = "content";

/// Probe suite for categories, search and questions
pub struct ContentSuite<'a> {
    client: &'a mut ApiClient,
    report: &'a mut ProbeReport,
    mentor_id: Option<String>,
}

impl<'a> ContentSuite<'a> {
    pub fn new(client: &'a mut ApiClient, report: &'a mut ProbeReport) -> Self {
        client.clear_token();
        Self {
            client,
            report,
            mentor_id: None,
        }
    }

    /// Run all content checks sequentially
    pub async fn run(mut self) {
        info!("Running content suite");

        let started = Instant::now();
        let outcome = self.check_categories().await;
        self.report
            .record(SUITE, "categories", "/api/categories", started, outcome);

        let started = Instant::now();
        let outcome = self.check_search_mentors().await;
        self.report
            .record(SUITE, "search_mentors", "/api/search/mentors", started, outcome);

        let started = Instant::now();
        let outcome = self.check_ask_question().await;
        self.report
            .record(SUITE, "ask_question", "/api/questions/ask", started, outcome);
    }

    async fn check_categories(&mut self) -> CheckResult {
        let response = self
            .client
            .get("/api/categories")
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let categories = response
            .array_field("categories")
            .ok_or("response missing categories array")?;

        if categories.is_empty() {
            return Err("categories list is empty".to_string());
        }
        Ok(())
    }

    async fn check_search_mentors(&mut self) -> CheckResult {
        let query = urlencoding::encode("business coach");
        let path = format!("/api/search/mentors?q={}", query);

        let response = self.client.get(&path).await.map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }

        let results = response
            .array_field("results")
            .ok_or("response missing results array")?;

        // The info endpoint advertises each mentor's tier; where both the
        // tier and the subscriber count are present they must agree.
        for mentor in results {
            let subscribers = mentor.get("subscriber_count").and_then(|v| v.as_u64());
            let tier = mentor.get("tier").and_then(|v| v.as_str());

            if let (Some(count), Some(tier)) = (subscribers, tier) {
                let expected = MentorTier::for_subscribers(count);
                if tier != expected.as_str() {
                    return Err(format!(
                        "mentor with {} subscribers advertised tier '{}', expected '{}'",
                        count, tier, expected
                    ));
                }
            }
        }

        self.mentor_id = results
            .first()
            .and_then(|m| m.get("mentor_id"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(())
    }

    async fn check_ask_question(&mut self) -> CheckResult {
        let mentor_id = self
            .mentor_id
            .clone()
            .ok_or("no mentor found to ask a question")?;

        // Questions require an authenticated user.
        let signup_body = json!({
            "email": throwaway_email("asker"),
            "password": throwaway_password(),
            "full_name": "Probe Asker",
        });
        let signup = self
            .client
            .post("/api/auth/signup", &signup_body)
            .await
            .map_err(|e| e.to_string())?;

        if signup.status != StatusCode::OK {
            return Err(format!("signup for question failed with {}", signup.status));
        }
        let token = signup
            .str_field("token")
            .ok_or("signup response missing token")?
            .to_string();
        self.client.set_token(token);

        let body = json!({
            "mentor_id": mentor_id,
            "question": "What is the single most important habit for a new founder?",
        });
        let response = self
            .client
            .post("/api/questions/ask", &body)
            .await
            .map_err(|e| e.to_string())?;

        if response.status != StatusCode::OK {
            return Err(format!("expected 200, got {}", response.status));
        }
        Ok(())
    }
}
