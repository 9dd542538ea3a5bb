//! Utility modules
//!
//! Common utilities used throughout the harness

pub mod errors;
pub mod helpers;
pub mod logging;

// Re-export commonly used items
pub use errors::{ErrorSeverity, MentorProbeError, ProbeError, Result};
