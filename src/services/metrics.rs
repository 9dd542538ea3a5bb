//! Metrics aggregation service
//!
//! Single-pass aggregation over in-memory record lists with fixed
//! today/week/month windows. Records with a missing `created_at` count
//! toward totals but match no window; a missing timestamp never panics.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::debug;

use crate::models::admin::PlatformMetricsSnapshot;
use crate::models::metrics::{FinancialMetrics, MentorMetrics, MentorTier, UserMetrics};
use crate::models::user::{MentorRecord, TransactionRecord, TransactionStatus, UserRecord};

/// The three aggregation windows, anchored at `now`
struct Windows {
    day_start: DateTime<Utc>,
    week_start: DateTime<Utc>,
    month_start: DateTime<Utc>,
}

impl Windows {
    fn at(now: DateTime<Utc>) -> Self {
        Self {
            day_start: now.date_naive().and_time(NaiveTime::MIN).and_utc(),
            week_start: now - Duration::days(7),
            month_start: now - Duration::days(30),
        }
    }
}

/// Aggregate user metrics as of now
pub fn user_metrics(users: &[UserRecord]) -> UserMetrics {
    user_metrics_at(users, Utc::now())
}

/// Aggregate user metrics anchored at a fixed instant
pub fn user_metrics_at(users: &[UserRecord], now: DateTime<Utc>) -> UserMetrics {
    let windows = Windows::at(now);
    let mut metrics = UserMetrics::default();

    for user in users {
        metrics.total_users += 1;
        if user.is_active {
            metrics.active_users += 1;
        }
        if user.is_subscribed {
            metrics.subscribed_users += 1;
        }
        metrics.questions_asked += user.questions_asked;

        if let Some(created) = user.created_at {
            if created >= windows.day_start {
                metrics.new_today += 1;
            }
            if created >= windows.week_start {
                metrics.new_this_week += 1;
            }
            if created >= windows.month_start {
                metrics.new_this_month += 1;
            }
        }
    }

    debug!(total = metrics.total_users, "Aggregated user metrics");
    metrics
}

/// Aggregate mentor metrics as of now
pub fn mentor_metrics(mentors: &[MentorRecord]) -> MentorMetrics {
    mentor_metrics_at(mentors, Utc::now())
}

/// Aggregate mentor metrics anchored at a fixed instant
pub fn mentor_metrics_at(mentors: &[MentorRecord], now: DateTime<Utc>) -> MentorMetrics {
    let windows = Windows::at(now);
    let mut metrics = MentorMetrics::default();

    for mentor in mentors {
        metrics.total_mentors += 1;
        if mentor.is_verified {
            metrics.verified_mentors += 1;
        }
        metrics.total_subscribers += mentor.subscriber_count;

        match MentorTier::for_subscribers(mentor.subscriber_count) {
            MentorTier::Free => metrics.free_tier += 1,
            MentorTier::Silver => metrics.silver_tier += 1,
            MentorTier::Gold => metrics.gold_tier += 1,
            MentorTier::Platinum => metrics.platinum_tier += 1,
        }

        if let Some(created) = mentor.created_at {
            if created >= windows.day_start {
                metrics.new_today += 1;
            }
            if created >= windows.week_start {
                metrics.new_this_week += 1;
            }
            if created >= windows.month_start {
                metrics.new_this_month += 1;
            }
        }
    }

    debug!(total = metrics.total_mentors, "Aggregated mentor metrics");
    metrics
}

/// Aggregate financial metrics as of now
pub fn financial_metrics(transactions: &[TransactionRecord]) -> FinancialMetrics {
    financial_metrics_at(transactions, Utc::now())
}

/// Aggregate financial metrics anchored at a fixed instant
pub fn financial_metrics_at(
    transactions: &[TransactionRecord],
    now: DateTime<Utc>,
) -> FinancialMetrics {
    let windows = Windows::at(now);
    let mut metrics = FinancialMetrics::default();

    for transaction in transactions {
        match transaction.status {
            TransactionStatus::Completed => metrics.completed_transactions += 1,
            TransactionStatus::Pending => metrics.pending_transactions += 1,
            TransactionStatus::Refunded => metrics.refunded_transactions += 1,
            TransactionStatus::Failed => metrics.failed_transactions += 1,
        }

        if transaction.status != TransactionStatus::Completed {
            continue;
        }

        metrics.total_revenue_cents += transaction.amount_cents;

        if let Some(created) = transaction.created_at {
            if created >= windows.day_start {
                metrics.revenue_today_cents += transaction.amount_cents;
            }
            if created >= windows.week_start {
                metrics.revenue_this_week_cents += transaction.amount_cents;
            }
            if created >= windows.month_start {
                metrics.revenue_this_month_cents += transaction.amount_cents;
            }
        }
    }

    debug!(
        completed = metrics.completed_transactions,
        revenue_cents = metrics.total_revenue_cents,
        "Aggregated financial metrics"
    );
    metrics
}

/// Build the daily platform snapshot as of now
pub fn daily_snapshot(
    users: &[UserRecord],
    mentors: &[MentorRecord],
    transactions: &[TransactionRecord],
) -> PlatformMetricsSnapshot {
    daily_snapshot_at(users, mentors, transactions, Utc::now())
}

/// Build the daily platform snapshot anchored at a fixed instant
pub fn daily_snapshot_at(
    users: &[UserRecord],
    mentors: &[MentorRecord],
    transactions: &[TransactionRecord],
    now: DateTime<Utc>,
) -> PlatformMetricsSnapshot {
    PlatformMetricsSnapshot {
        snapshot_date: now.date_naive(),
        users: user_metrics_at(users, now),
        mentors: mentor_metrics_at(mentors, now),
        financial: financial_metrics_at(transactions, now),
        generated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn user(created_at: Option<DateTime<Utc>>) -> UserRecord {
        UserRecord {
            user_id: "u-1".to_string(),
            email: "user@example.com".to_string(),
            full_name: "Test User".to_string(),
            created_at,
            last_login_at: None,
            is_active: true,
            is_subscribed: false,
            questions_asked: 0,
        }
    }

    fn mentor(created_at: Option<DateTime<Utc>>, subscribers: u64) -> MentorRecord {
        MentorRecord {
            mentor_id: "m-1".to_string(),
            full_name: "Test Mentor".to_string(),
            category: Some("business".to_string()),
            is_verified: true,
            created_at,
            subscriber_count: subscribers,
            monthly_price_cents: 999,
        }
    }

    fn transaction(
        status: TransactionStatus,
        amount_cents: i64,
        created_at: Option<DateTime<Utc>>,
    ) -> TransactionRecord {
        TransactionRecord {
            transaction_id: "t-1".to_string(),
            user_id: "u-1".to_string(),
            amount_cents,
            status,
            created_at,
        }
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(user_metrics_at(&[], fixed_now()), UserMetrics::default());
        assert_eq!(mentor_metrics_at(&[], fixed_now()), MentorMetrics::default());
        assert_eq!(
            financial_metrics_at(&[], fixed_now()),
            FinancialMetrics::default()
        );
    }

    #[test]
    fn test_user_windows() {
        let now = fixed_now();
        let users = vec![
            user(Some(now - Duration::hours(2))),  // today
            user(Some(now - Duration::days(3))),   // week + month
            user(Some(now - Duration::days(20))),  // month only
            user(Some(now - Duration::days(120))), // none
        ];

        let metrics = user_metrics_at(&users, now);
        assert_eq!(metrics.total_users, 4);
        assert_eq!(metrics.new_today, 1);
        assert_eq!(metrics.new_this_week, 2);
        assert_eq!(metrics.new_this_month, 3);
    }

    #[test]
    fn test_today_window_starts_at_utc_midnight() {
        let now = fixed_now(); // 12:00 UTC
        let users = vec![
            user(Some(now - Duration::hours(11))), // 01:00 same day
            user(Some(now - Duration::hours(13))), // 23:00 previous day
        ];

        let metrics = user_metrics_at(&users, now);
        assert_eq!(metrics.new_today, 1);
        assert_eq!(metrics.new_this_week, 2);
    }

    #[test]
    fn test_missing_created_at_does_not_panic() {
        // Regression guard for the null-timestamp case: counted in totals,
        // absent from every window.
        let metrics = mentor_metrics_at(&[mentor(None, 50)], fixed_now());
        assert_eq!(metrics.total_mentors, 1);
        assert_eq!(metrics.new_this_month, 0);
        assert_eq!(metrics.silver_tier, 1);

        let metrics = user_metrics_at(&[user(None)], fixed_now());
        assert_eq!(metrics.total_users, 1);
        assert_eq!(metrics.new_today, 0);

        let metrics =
            financial_metrics_at(&[transaction(TransactionStatus::Completed, 500, None)], fixed_now());
        assert_eq!(metrics.completed_transactions, 1);
        assert_eq!(metrics.total_revenue_cents, 500);
        assert_eq!(metrics.revenue_this_month_cents, 0);
    }

    #[test]
    fn test_mentor_tier_counts() {
        let now = fixed_now();
        let mentors = vec![
            mentor(Some(now), 0),
            mentor(Some(now), 25),
            mentor(Some(now), 250),
            mentor(Some(now), 2500),
        ];

        let metrics = mentor_metrics_at(&mentors, now);
        assert_eq!(metrics.free_tier, 1);
        assert_eq!(metrics.silver_tier, 1);
        assert_eq!(metrics.gold_tier, 1);
        assert_eq!(metrics.platinum_tier, 1);
        assert_eq!(metrics.total_subscribers, 2775);
    }

    #[test]
    fn test_only_completed_transactions_count_as_revenue() {
        let now = fixed_now();
        let transactions = vec![
            transaction(TransactionStatus::Completed, 1000, Some(now - Duration::hours(1))),
            transaction(TransactionStatus::Pending, 2000, Some(now - Duration::hours(1))),
            transaction(TransactionStatus::Refunded, 3000, Some(now - Duration::hours(1))),
            transaction(TransactionStatus::Completed, 4000, Some(now - Duration::days(10))),
        ];

        let metrics = financial_metrics_at(&transactions, now);
        assert_eq!(metrics.total_revenue_cents, 5000);
        assert_eq!(metrics.revenue_today_cents, 1000);
        assert_eq!(metrics.revenue_this_week_cents, 1000);
        assert_eq!(metrics.revenue_this_month_cents, 5000);
        assert_eq!(metrics.completed_transactions, 2);
        assert_eq!(metrics.pending_transactions, 1);
        assert_eq!(metrics.refunded_transactions, 1);
    }

    #[test]
    fn test_daily_snapshot_combines_all_three() {
        let now = fixed_now();
        let snapshot = daily_snapshot_at(
            &[user(Some(now))],
            &[mentor(Some(now), 15)],
            &[transaction(TransactionStatus::Completed, 999, Some(now))],
            now,
        );

        assert_eq!(snapshot.snapshot_date, now.date_naive());
        assert_eq!(snapshot.users.total_users, 1);
        assert_eq!(snapshot.mentors.total_mentors, 1);
        assert_eq!(snapshot.financial.total_revenue_cents, 999);
    }
}
