//! Data models module
//!
//! Typed records and request bodies for the admin console and the
//! platform API the probes exercise

pub mod admin;
pub mod metrics;
pub mod user;

pub use admin::{
    AdminAccount, AdminActivityLog, AdminLoginRequest, AdminRole, AdminSignupRequest, AdminStatus,
    MentorAction, MentorManagementRequest, PlatformMetricsSnapshot, UserAction,
    UserManagementRequest,
};
pub use metrics::{FinancialMetrics, MentorMetrics, MentorTier, UserMetrics};
pub use user::{
    AskQuestionRequest, BankingInfoRequest, CreatorSignupRequest, ForgotPasswordRequest,
    IdVerificationRequest, LoginRequest, MentorRecord, ResetPasswordRequest, SignupRequest,
    TransactionRecord, TransactionStatus, UserRecord,
};
