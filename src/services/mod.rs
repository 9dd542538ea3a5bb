//! Services module
//!
//! This module contains the harness business logic: the platform API
//! client, permission lookup, metrics aggregation and auth helpers

pub mod api;
pub mod auth;
pub mod metrics;
pub mod permissions;

// Re-export commonly used items
pub use api::{expect_status, ApiClient, ApiResponse};
pub use auth::{decode_claims_unverified, initial_super_admin, TokenClaims};
pub use metrics::{daily_snapshot, financial_metrics, mentor_metrics, user_metrics};
pub use permissions::{has_permission, has_permission_named, role_permissions, Permission};
