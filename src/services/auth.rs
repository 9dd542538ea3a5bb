//! Authentication service
//!
//! Admin token claim inspection, password digests and the seed
//! super-admin constructor.

use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::admin::{AdminAccount, AdminRole, AdminStatus};
use crate::services::permissions;
use crate::utils::errors::Result;
use crate::utils::helpers;

/// Claims the platform embeds in admin/user bearer tokens
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Role claim parsed against the known admin roles
    pub fn admin_role(&self) -> Option<AdminRole> {
        self.role.as_deref().and_then(AdminRole::parse)
    }

    /// Whether the token is still valid at the given instant
    ///
    /// Tokens without an `exp` claim are treated as non-expiring.
    pub fn valid_at(&self, now: DateTime<Utc>) -> bool {
        match self.exp {
            Some(exp) => match Utc.timestamp_opt(exp, 0).single() {
                Some(expiry) => expiry > now,
                None => false,
            },
            None => true,
        }
    }
}

/// Decode token claims without verifying the signature
///
/// The probes never hold the backend's signing key; claims are inspected
/// for shape only and must not be trusted for authorization.
pub fn decode_claims_unverified(token: &str) -> Result<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&[]),
        &validation,
    )?;

    debug!(role = ?data.claims.role, "Decoded token claims");
    Ok(data.claims)
}

/// Generate a random hex salt
pub fn generate_salt() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Salted SHA-256 password digest, stored as `salt$hex`
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{}${}", salt, hex::encode(hasher.finalize()))
}

/// Verify a password against a `salt$hex` digest
pub fn verify_password(password: &str, digest: &str) -> bool {
    match digest.split_once('$') {
        Some((salt, _)) => hash_password(password, salt) == digest,
        None => false,
    }
}

/// Build the initial super-admin account document
///
/// Seed-only constructor; the live backend owns account creation after
/// bootstrap.
pub fn initial_super_admin(email: &str, full_name: &str, password: &str) -> AdminAccount {
    let now = Utc::now();
    let salt = generate_salt();

    AdminAccount {
        admin_id: helpers::generate_uuid(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        password_digest: hash_password(password, &salt),
        role: AdminRole::SuperAdmin,
        status: AdminStatus::Active,
        permissions: permissions::permission_names(AdminRole::SuperAdmin),
        failed_login_attempts: 0,
        locked_until: None,
        created_at: now,
        updated_at: now,
        last_login_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn test_password_digest_round_trip() {
        let salt = generate_salt();
        let digest = hash_password("s3cret!", &salt);
        assert!(verify_password("s3cret!", &digest));
        assert!(!verify_password("wrong", &digest));
        assert!(!verify_password("s3cret!", "not-a-digest"));
    }

    #[test]
    fn test_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_initial_super_admin_shape() {
        let account = initial_super_admin("root@onlymentors.ai", "Root Admin", "pw");
        assert_eq!(account.role, AdminRole::SuperAdmin);
        assert_eq!(account.status, AdminStatus::Active);
        assert!(account.permissions.contains(&"manage_admins".to_string()));
        assert!(verify_password("pw", &account.password_digest));
        assert_eq!(account.failed_login_attempts, 0);
    }

    #[test]
    fn test_decode_claims_unverified() {
        let claims = TokenClaims {
            sub: Some("adm-1".to_string()),
            email: Some("ops@onlymentors.ai".to_string()),
            role: Some("super_admin".to_string()),
            exp: Some((Utc::now() + chrono::Duration::hours(1)).timestamp()),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"not-the-real-key"),
        )
        .unwrap();

        let decoded = decode_claims_unverified(&token).unwrap();
        assert_eq!(decoded.admin_role(), Some(AdminRole::SuperAdmin));
        assert!(decoded.valid_at(Utc::now()));
    }

    #[test]
    fn test_expired_claims() {
        let claims = TokenClaims {
            exp: Some((Utc::now() - chrono::Duration::hours(1)).timestamp()),
            ..Default::default()
        };
        assert!(!claims.valid_at(Utc::now()));

        let no_expiry = TokenClaims::default();
        assert!(no_expiry.valid_at(Utc::now()));
    }

    #[test]
    fn test_garbage_token_is_an_error() {
        assert!(decode_claims_unverified("not.a.token").is_err());
    }
}
