//! Admin console models
//!
//! Account, activity-log and metrics-snapshot records for the admin
//! back office, plus the request bodies the console endpoints accept.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::metrics::{FinancialMetrics, MentorMetrics, UserMetrics};

/// Failed logins tolerated before an account locks
pub const MAX_FAILED_LOGINS: u32 = 5;

/// How long a locked account stays locked
pub const LOCKOUT_MINUTES: i64 = 30;

/// Admin console roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    SuperAdmin,
    AdminManager,
    ReportsViewer,
    AiAgent,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "super_admin",
            AdminRole::AdminManager => "admin_manager",
            AdminRole::ReportsViewer => "reports_viewer",
            AdminRole::AiAgent => "ai_agent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "super_admin" => Some(AdminRole::SuperAdmin),
            "admin_manager" => Some(AdminRole::AdminManager),
            "reports_viewer" => Some(AdminRole::ReportsViewer),
            "ai_agent" => Some(AdminRole::AiAgent),
            _ => None,
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Admin account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminStatus {
    Active,
    Suspended,
    PendingActivation,
    Locked,
}

/// Management actions an admin can take on a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Suspend,
    Reactivate,
    Delete,
    ResetPassword,
}

/// Management actions an admin can take on a mentor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentorAction {
    Approve,
    Suspend,
    Reactivate,
    Delete,
    ResetPassword,
}

/// Admin account record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccount {
    pub admin_id: String,
    pub email: String,
    pub full_name: String,
    pub password_digest: String,
    pub role: AdminRole,
    pub status: AdminStatus,
    /// Capability names granted to this account, derived from the role
    pub permissions: Vec<String>,
    pub failed_login_attempts: u32,
    pub locked_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl AdminAccount {
    /// Whether the account is locked out at the given instant
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        if self.status == AdminStatus::Locked {
            return true;
        }
        self.locked_until.map_or(false, |until| until > now)
    }

    /// Record a failed login attempt, locking the account once the
    /// threshold is reached
    pub fn register_failed_login(&mut self, now: DateTime<Utc>) {
        self.failed_login_attempts += 1;
        self.updated_at = now;

        if self.failed_login_attempts >= MAX_FAILED_LOGINS {
            self.locked_until = Some(now + Duration::minutes(LOCKOUT_MINUTES));
        }
    }

    /// Record a successful login, clearing lockout bookkeeping
    pub fn register_successful_login(&mut self, now: DateTime<Utc>) {
        self.failed_login_attempts = 0;
        self.locked_until = None;
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

/// Append-only admin activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminActivityLog {
    pub entry_id: String,
    pub admin_id: String,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    pub detail: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AdminActivityLog {
    /// Record a new activity entry at the current instant
    pub fn record(
        admin_id: &str,
        action: &str,
        target_type: &str,
        target_id: &str,
        detail: Option<String>,
    ) -> Self {
        Self {
            entry_id: crate::utils::helpers::generate_uuid(),
            admin_id: admin_id.to_string(),
            action: action.to_string(),
            target_type: target_type.to_string(),
            target_id: target_id.to_string(),
            detail,
            timestamp: Utc::now(),
        }
    }
}

/// Daily platform metrics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformMetricsSnapshot {
    pub snapshot_date: chrono::NaiveDate,
    pub users: UserMetrics,
    pub mentors: MentorMetrics,
    pub financial: FinancialMetrics,
    pub generated_at: DateTime<Utc>,
}

/// Admin signup request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSignupRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub role: AdminRole,
}

/// Admin login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// User management request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserManagementRequest {
    pub user_id: String,
    pub action: UserAction,
    pub reason: Option<String>,
}

/// Mentor management request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorManagementRequest {
    pub mentor_id: String,
    pub action: MentorAction,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn account() -> AdminAccount {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        AdminAccount {
            admin_id: "adm-1".to_string(),
            email: "ops@onlymentors.ai".to_string(),
            full_name: "Ops Admin".to_string(),
            password_digest: "digest".to_string(),
            role: AdminRole::AdminManager,
            status: AdminStatus::Active,
            permissions: vec![],
            failed_login_attempts: 0,
            locked_until: None,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    #[test]
    fn test_role_round_trip() {
        for role in [
            AdminRole::SuperAdmin,
            AdminRole::AdminManager,
            AdminRole::ReportsViewer,
            AdminRole::AiAgent,
        ] {
            assert_eq!(AdminRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(AdminRole::parse("root"), None);
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&AdminRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super_admin\"");
        let role: AdminRole = serde_json::from_str("\"ai_agent\"").unwrap();
        assert_eq!(role, AdminRole::AiAgent);
    }

    #[test]
    fn test_lockout_after_threshold() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut account = account();

        for _ in 0..MAX_FAILED_LOGINS - 1 {
            account.register_failed_login(now);
        }
        assert!(!account.is_locked(now));

        account.register_failed_login(now);
        assert!(account.is_locked(now));
        assert!(!account.is_locked(now + Duration::minutes(LOCKOUT_MINUTES + 1)));
    }

    #[test]
    fn test_successful_login_clears_lockout() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut account = account();

        for _ in 0..MAX_FAILED_LOGINS {
            account.register_failed_login(now);
        }
        account.register_successful_login(now + Duration::hours(1));

        assert_eq!(account.failed_login_attempts, 0);
        assert!(account.locked_until.is_none());
        assert_eq!(account.last_login_at, Some(now + Duration::hours(1)));
    }

    #[test]
    fn test_activity_log_record() {
        let entry = AdminActivityLog::record(
            "adm-1",
            "suspend",
            "mentor",
            "mentor-42",
            Some("spam content".to_string()),
        );
        assert_eq!(entry.admin_id, "adm-1");
        assert_eq!(entry.target_type, "mentor");
        assert!(!entry.entry_id.is_empty());
    }
}
