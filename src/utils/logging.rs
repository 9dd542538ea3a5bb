//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the MentorProbe harness.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the worker guard for the rolling file writer when file logging
/// is configured; the guard must stay alive for the duration of the run.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::new(&config.level);

    let guard = if let Some(ref dir) = config.file_path {
        let file_appender = tracing_appender::rolling::daily(dir, "mentorprobe.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
            .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
            .init();

        Some(guard)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
            .init();

        None
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a single probe check result with structured data
pub fn log_check_result(suite: &str, check: &str, endpoint: &str, passed: bool, detail: Option<&str>) {
    if passed {
        info!(
            suite = suite,
            check = check,
            endpoint = endpoint,
            "Check passed"
        );
    } else {
        warn!(
            suite = suite,
            check = check,
            endpoint = endpoint,
            detail = detail,
            "Check failed"
        );
    }
}

/// Log admin actions observed or exercised by the probes
pub fn log_admin_action(admin_id: &str, action: &str, target: Option<&str>, details: Option<&str>) {
    warn!(
        admin_id = admin_id,
        action = action,
        target = target,
        details = details,
        "Admin action performed"
    );
}

/// Log authentication events against the platform API
pub fn log_auth_event(email: &str, action: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            email = email,
            action = action,
            details = details,
            "Authentication event: success"
        );
    } else {
        warn!(
            email = email,
            action = action,
            details = details,
            "Authentication event: failure"
        );
    }
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str, context: Option<&str>) {
    error!(
        endpoint = endpoint,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log suite-level timing
pub fn log_suite_timing(suite: &str, checks: usize, duration_ms: u64) {
    debug!(
        suite = suite,
        checks = checks,
        duration_ms = duration_ms,
        "Suite completed"
    );
}
