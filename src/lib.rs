//! MentorProbe
//!
//! An HTTP smoke-test harness for the OnlyMentors.ai platform API.
//! This library provides a typed API client, sequential probe suites for
//! the auth/admin/creator/content/business/OAuth surfaces, and the admin
//! domain model (roles, permissions, metrics aggregation) the console
//! endpoints are built on.

pub mod config;
pub mod models;
pub mod report;
pub mod services;
pub mod suites;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{MentorProbeError, Result};

// Re-export main components for easy access
pub use report::ProbeReport;
pub use services::api::ApiClient;
pub use suites::SuiteRunner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
