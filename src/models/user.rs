//! Platform-side models
//!
//! Records for platform users, mentors and payment transactions as the
//! admin reporting endpoints expose them, plus the auth/creator request
//! bodies the probe suites send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform user record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
    pub full_name: String,
    /// Missing on legacy accounts imported without timestamps
    pub created_at: Option<DateTime<Utc>>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub is_subscribed: bool,
    pub questions_asked: u64,
}

/// Mentor (creator) record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MentorRecord {
    pub mentor_id: String,
    pub full_name: String,
    pub category: Option<String>,
    pub is_verified: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub subscriber_count: u64,
    pub monthly_price_cents: i64,
}

/// Payment transaction status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Refunded,
    Failed,
}

/// Payment transaction record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub user_id: String,
    pub amount_cents: i64,
    pub status: TransactionStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// User signup request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// User login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Forgot-password request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset-password request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub new_password: String,
}

/// Creator signup request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorSignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub account_name: String,
    pub category: String,
    pub monthly_price_cents: i64,
}

/// Creator banking details request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankingInfoRequest {
    pub bank_name: String,
    pub account_holder: String,
    pub account_number: String,
    pub routing_number: String,
}

/// Creator identity verification request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdVerificationRequest {
    pub document_type: String,
    pub document_number: String,
}

/// Question submission request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskQuestionRequest {
    pub mentor_id: String,
    pub question: String,
}
