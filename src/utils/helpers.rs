//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the harness,
//! mostly around generating throwaway probe identities so reruns do not
//! collide with accounts created by earlier runs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a random alphanumeric string
pub fn generate_random_string(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::thread_rng();

    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate a unique throwaway email for a probe run
pub fn throwaway_email(prefix: &str) -> String {
    format!("{}.{}@mentorprobe.dev", prefix, generate_random_string(10))
}

/// Generate a throwaway password that satisfies common complexity rules
pub fn throwaway_password() -> String {
    format!("Pr0be!{}", generate_random_string(12))
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Format a pass rate as a percentage string
pub fn format_percentage(passed: usize, total: usize) -> String {
    if total == 0 {
        "100.0%".to_string()
    } else {
        format!("{:.1}%", (passed as f64 / total as f64) * 100.0)
    }
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throwaway_email_is_unique() {
        let a = throwaway_email("smoke");
        let b = throwaway_email("smoke");
        assert_ne!(a, b);
        assert!(is_valid_email(&a));
        assert!(a.starts_with("smoke."));
    }

    #[test]
    fn test_throwaway_password_length() {
        let password = throwaway_password();
        assert!(password.len() >= 12);
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0, 0), "100.0%");
        assert_eq!(format_percentage(1, 2), "50.0%");
        assert_eq!(format_percentage(3, 3), "100.0%");
    }

    #[test]
    fn test_random_string_charset() {
        let s = generate_random_string(32);
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
