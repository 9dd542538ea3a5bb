//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main harness configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub admin: AdminConfig,
    pub probe: ProbeConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Target platform API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Origin of the backend under test, e.g. `https://preview.onlymentors.ai`
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Admin console credentials used by the admin suite
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

/// Probe run configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Suites to run, in declaration order. Empty means all suites.
    pub suites: Vec<String>,
    /// Abort the run after the first suite that records a failure
    pub stop_on_failure: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file; stdout-only when unset
    pub file_path: Option<String>,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    /// Probe the business-portal endpoints
    pub business_portal: bool,
    /// Probe the OAuth provider config endpoints
    pub oauth_providers: bool,
    /// Exercise mutating admin endpoints (suspend/delete/reset-password)
    pub destructive_checks: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("MENTORPROBE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load settings from an explicit configuration file
    pub fn from_file(path: &std::path::Path) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("MENTORPROBE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::MentorProbeError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8001".to_string(),
                timeout_seconds: 30,
                user_agent: "MentorProbe/1.0".to_string(),
            },
            admin: AdminConfig {
                email: "admin@onlymentors.ai".to_string(),
                password: String::new(),
            },
            probe: ProbeConfig {
                suites: vec![],
                stop_on_failure: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
            features: FeaturesConfig {
                business_portal: true,
                oauth_providers: true,
                destructive_checks: false,
            },
        }
    }
}
