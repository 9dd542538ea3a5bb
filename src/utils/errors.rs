//! Error handling for MentorProbe
//!
//! This module defines the main error types used throughout the harness
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the MentorProbe harness
#[derive(Error, Debug)]
pub enum MentorProbeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Unexpected status for {endpoint}: expected {expected}, got {actual}")]
    UnexpectedStatus {
        endpoint: String,
        expected: u16,
        actual: u16,
    },

    #[error("Response from {endpoint} is missing field: {field}")]
    MissingField { endpoint: String, field: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Transport-level probe errors against the platform API
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API request timed out")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("API service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for MentorProbe operations
pub type Result<T> = std::result::Result<T, MentorProbeError>;

impl MentorProbeError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            MentorProbeError::Config(_) => false,
            MentorProbeError::Http(_) => true,
            MentorProbeError::Probe(_) => true,
            MentorProbeError::Serialization(_) => false,
            MentorProbeError::Io(_) => true,
            MentorProbeError::UrlParse(_) => false,
            MentorProbeError::Token(_) => false,
            MentorProbeError::Authentication(_) => false,
            MentorProbeError::PermissionDenied(_) => false,
            MentorProbeError::UnexpectedStatus { .. } => true,
            MentorProbeError::MissingField { .. } => true,
            MentorProbeError::InvalidInput(_) => false,
            MentorProbeError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MentorProbeError::Config(_) => ErrorSeverity::Critical,
            MentorProbeError::UrlParse(_) => ErrorSeverity::Critical,
            MentorProbeError::Authentication(_) => ErrorSeverity::Warning,
            MentorProbeError::PermissionDenied(_) => ErrorSeverity::Warning,
            MentorProbeError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        assert_eq!(
            MentorProbeError::Config("missing".to_string()).severity(),
            ErrorSeverity::Critical
        );
        assert_eq!(
            MentorProbeError::Authentication("bad token".to_string()).severity(),
            ErrorSeverity::Warning
        );
        assert_eq!(
            MentorProbeError::Probe(ProbeError::Timeout).severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_recoverability() {
        assert!(MentorProbeError::Probe(ProbeError::ServiceUnavailable).is_recoverable());
        assert!(MentorProbeError::UnexpectedStatus {
            endpoint: "/api/auth/login".to_string(),
            expected: 200,
            actual: 500,
        }
        .is_recoverable());
        assert!(!MentorProbeError::Config("bad".to_string()).is_recoverable());
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = MentorProbeError::UnexpectedStatus {
            endpoint: "/api/admin/dashboard".to_string(),
            expected: 200,
            actual: 403,
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status for /api/admin/dashboard: expected 200, got 403"
        );
    }
}
