//! Configuration validation module
//!
//! This module provides validation functions for harness configuration
//! to ensure all required settings are properly configured before a run.

use url::Url;

use super::Settings;
use crate::suites::SUITE_NAMES;
use crate::utils::errors::{MentorProbeError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_admin_config(settings)?;
    validate_probe_config(&settings.probe)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate target API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(MentorProbeError::Config(
            "API base URL is required".to_string(),
        ));
    }

    let url = Url::parse(&config.base_url).map_err(|e| {
        MentorProbeError::Config(format!("Invalid API base URL '{}': {}", config.base_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(MentorProbeError::Config(format!(
            "API base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.timeout_seconds == 0 {
        return Err(MentorProbeError::Config(
            "API timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate admin credentials when the admin suite will run
fn validate_admin_config(settings: &Settings) -> Result<()> {
    let admin_suite_enabled =
        settings.probe.suites.is_empty() || settings.probe.suites.iter().any(|s| s == "admin");

    if !admin_suite_enabled {
        return Ok(());
    }

    if !settings.admin.email.contains('@') {
        return Err(MentorProbeError::Config(
            "Admin email must be a valid address".to_string(),
        ));
    }

    if settings.admin.password.is_empty() {
        return Err(MentorProbeError::Config(
            "Admin password is required when the admin suite is enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validate probe run configuration
fn validate_probe_config(config: &super::ProbeConfig) -> Result<()> {
    for suite in &config.suites {
        if !SUITE_NAMES.contains(&suite.as_str()) {
            return Err(MentorProbeError::Config(format!(
                "Unknown probe suite: '{}'. Valid suites: {:?}",
                suite, SUITE_NAMES
            )));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(MentorProbeError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(MentorProbeError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
