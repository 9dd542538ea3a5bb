//! Metrics output models
//!
//! Typed aggregates produced by the metrics service, plus the
//! subscriber-count tier buckets exposed by the mentor info endpoints.

use serde::{Deserialize, Serialize};

/// Aggregated user metrics over fixed time windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetrics {
    pub total_users: u64,
    pub new_today: u64,
    pub new_this_week: u64,
    pub new_this_month: u64,
    pub active_users: u64,
    pub subscribed_users: u64,
    pub questions_asked: u64,
}

/// Aggregated mentor metrics over fixed time windows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorMetrics {
    pub total_mentors: u64,
    pub verified_mentors: u64,
    pub new_today: u64,
    pub new_this_week: u64,
    pub new_this_month: u64,
    pub total_subscribers: u64,
    pub free_tier: u64,
    pub silver_tier: u64,
    pub gold_tier: u64,
    pub platinum_tier: u64,
}

/// Aggregated financial metrics over fixed time windows
///
/// All amounts are integer cents; only completed transactions count
/// toward revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub total_revenue_cents: i64,
    pub revenue_today_cents: i64,
    pub revenue_this_week_cents: i64,
    pub revenue_this_month_cents: i64,
    pub completed_transactions: u64,
    pub pending_transactions: u64,
    pub refunded_transactions: u64,
    pub failed_transactions: u64,
}

/// Subscriber-count-based mentor ranking bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentorTier {
    Free,
    Silver,
    Gold,
    Platinum,
}

impl MentorTier {
    /// Bucket for a given subscriber count
    pub fn for_subscribers(count: u64) -> Self {
        match count {
            0..=9 => MentorTier::Free,
            10..=99 => MentorTier::Silver,
            100..=999 => MentorTier::Gold,
            _ => MentorTier::Platinum,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MentorTier::Free => "free",
            MentorTier::Silver => "silver",
            MentorTier::Gold => "gold",
            MentorTier::Platinum => "platinum",
        }
    }
}

impl std::fmt::Display for MentorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MentorTier::for_subscribers(0), MentorTier::Free);
        assert_eq!(MentorTier::for_subscribers(9), MentorTier::Free);
        assert_eq!(MentorTier::for_subscribers(10), MentorTier::Silver);
        assert_eq!(MentorTier::for_subscribers(99), MentorTier::Silver);
        assert_eq!(MentorTier::for_subscribers(100), MentorTier::Gold);
        assert_eq!(MentorTier::for_subscribers(999), MentorTier::Gold);
        assert_eq!(MentorTier::for_subscribers(1000), MentorTier::Platinum);
    }

    #[test]
    fn test_tier_serde() {
        let json = serde_json::to_string(&MentorTier::Gold).unwrap();
        assert_eq!(json, "\"gold\"");
    }

    #[test]
    fn test_default_metrics_are_zero() {
        let metrics = UserMetrics::default();
        assert_eq!(metrics.total_users, 0);
        assert_eq!(metrics.new_this_month, 0);

        let financial = FinancialMetrics::default();
        assert_eq!(financial.total_revenue_cents, 0);
    }
}
