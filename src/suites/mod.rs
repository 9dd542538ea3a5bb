//! Probe suites
//!
//! One module per platform surface, plus the sequential runner that
//! executes enabled suites in a fixed order against a shared client.

pub mod admin;
pub mod auth;
pub mod business;
pub mod content;
pub mod creators;
pub mod oauth;

use std::time::Instant;

use tracing::{info, warn};

use crate::config::Settings;
use crate::report::ProbeReport;
use crate::services::api::ApiClient;
use crate::utils::errors::Result;
use crate::utils::logging::log_suite_timing;

/// All suite names, in execution order
pub const SUITE_NAMES: &[&str] = &["auth", "admin", "creators", "content", "business", "oauth"];

/// Sequential probe suite runner
pub struct SuiteRunner {
    settings: Settings,
}

impl SuiteRunner {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Suites that will run, honoring the configured selection and
    /// feature flags, in fixed order
    pub fn enabled_suites(&self) -> Vec<&'static str> {
        SUITE_NAMES
            .iter()
            .copied()
            .filter(|name| {
                let requested = self.settings.probe.suites.is_empty()
                    || self.settings.probe.suites.iter().any(|s| s == name);
                let feature_enabled = match *name {
                    "business" => self.settings.features.business_portal,
                    "oauth" => self.settings.features.oauth_providers,
                    _ => true,
                };
                requested && feature_enabled
            })
            .collect()
    }

    /// Run all enabled suites sequentially and return the report
    pub async fn run(&self) -> Result<ProbeReport> {
        let mut report = ProbeReport::new();
        let mut client = ApiClient::new(&self.settings.api)?;

        info!(
            base_url = %self.settings.api.base_url,
            suites = ?self.enabled_suites(),
            "Starting probe run"
        );

        for suite in self.enabled_suites() {
            let started = Instant::now();
            let checks_before = report.total();

            match suite {
                "auth" => auth::AuthSuite::new(&mut client, &mut report).run().await,
                "admin" => {
                    admin::AdminSuite::new(&mut client, &mut report, &self.settings)
                        .run()
                        .await
                }
                "creators" => {
                    creators::CreatorSuite::new(&mut client, &mut report)
                        .run()
                        .await
                }
                "content" => {
                    content::ContentSuite::new(&mut client, &mut report)
                        .run()
                        .await
                }
                "business" => {
                    business::BusinessSuite::new(&mut client, &mut report)
                        .run()
                        .await
                }
                "oauth" => oauth::OauthSuite::new(&mut client, &mut report).run().await,
                _ => continue,
            }

            log_suite_timing(
                suite,
                report.total() - checks_before,
                started.elapsed().as_millis() as u64,
            );

            if self.settings.probe.stop_on_failure && !report.is_success() {
                warn!(suite = suite, "Stopping run after failed suite");
                break;
            }
        }

        Ok(report)
    }
}
