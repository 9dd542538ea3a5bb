//! Probe run reporting
//!
//! Accumulates per-check outcomes and renders the end-of-run summary.
//! Counters are derived from the recorded checks, so `passed <= total`
//! holds by construction.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::utils::helpers::format_percentage;
use crate::utils::logging::log_check_result;

/// Outcome of one check, `Err` carrying the failure detail
pub type CheckResult = std::result::Result<(), String>;

/// A single recorded check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRecord {
    pub suite: String,
    pub name: String,
    pub endpoint: String,
    pub passed: bool,
    pub detail: Option<String>,
    pub duration_ms: u64,
}

/// Accumulated outcomes for a probe run
#[derive(Debug, Clone, Default)]
pub struct ProbeReport {
    checks: Vec<CheckRecord>,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check outcome and log it
    pub fn record(
        &mut self,
        suite: &str,
        name: &str,
        endpoint: &str,
        started: Instant,
        outcome: CheckResult,
    ) {
        let duration_ms = started.elapsed().as_millis() as u64;
        let (passed, detail) = match outcome {
            Ok(()) => (true, None),
            Err(detail) => (false, Some(detail)),
        };

        log_check_result(suite, name, endpoint, passed, detail.as_deref());

        self.checks.push(CheckRecord {
            suite: suite.to_string(),
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            passed,
            detail,
            duration_ms,
        });
    }

    pub fn total(&self) -> usize {
        self.checks.len()
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Whether every recorded check passed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn checks(&self) -> &[CheckRecord] {
        &self.checks
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckRecord> {
        self.checks.iter().filter(|c| !c.passed)
    }

    /// (suite, passed, total) tallies in first-seen suite order
    pub fn suite_totals(&self) -> Vec<(String, usize, usize)> {
        let mut totals: Vec<(String, usize, usize)> = Vec::new();

        for check in &self.checks {
            match totals.iter_mut().find(|(suite, _, _)| suite == &check.suite) {
                Some((_, passed, total)) => {
                    *total += 1;
                    if check.passed {
                        *passed += 1;
                    }
                }
                None => {
                    totals.push((
                        check.suite.clone(),
                        usize::from(check.passed),
                        1,
                    ));
                }
            }
        }

        totals
    }

    /// Render the end-of-run summary
    pub fn render_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push("=== MentorProbe summary ===".to_string());

        for (suite, passed, total) in self.suite_totals() {
            lines.push(format!(
                "  {:<10} {:>2}/{:<2} ({})",
                suite,
                passed,
                total,
                format_percentage(passed, total)
            ));
        }

        for failure in self.failures() {
            lines.push(format!(
                "  FAIL {}::{} [{}] {}",
                failure.suite,
                failure.name,
                failure.endpoint,
                failure.detail.as_deref().unwrap_or("no detail")
            ));
        }

        lines.push(format!(
            "  overall: {}/{} checks passed ({})",
            self.passed(),
            self.total(),
            format_percentage(self.passed(), self.total())
        ));

        lines.join("\n")
    }
}
