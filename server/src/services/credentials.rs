//! Email + password credential service.
//!
//! ERROR HANDLING
//! ==============
//! Credential rejection (bad email, weak password, wrong password, taken
//! email) is an outcome value, not an error: callers turn it into an
//! `AuthResult { success: false }` response. Only infrastructure failures
//! (database) surface as `Err`.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 8;
const SALT_BYTES: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Outcome of a credential check or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOutcome {
    /// Credentials accepted; the caller should mint a session.
    Accepted { user_id: Uuid },
    /// Credentials rejected with a user-facing message.
    Rejected { error: String },
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; SALT_BYTES] = rand::rng().random();
    bytes_to_hex(&bytes)
}

fn digest_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Stored form: `{salt}${digest}` in a single column.
#[must_use]
pub fn hash_password(password: &str) -> String {
    let salt = generate_salt();
    let digest = digest_password(&salt, password);
    format!("{salt}${digest}")
}

#[must_use]
pub fn verify_password(stored: &str, password: &str) -> bool {
    let Some((salt, digest)) = stored.split_once('$') else {
        return false;
    };
    digest_password(salt, password) == digest
}

/// Register a new user.
///
/// # Errors
///
/// Returns a database error if any query fails.
pub async fn sign_up(pool: &PgPool, email: &str, password: &str) -> Result<CredentialOutcome, CredentialError> {
    let Some(email) = normalize_email(email) else {
        return Ok(CredentialOutcome::Rejected { error: "Enter a valid email address".to_owned() });
    };
    if password.len() < MIN_PASSWORD_LEN {
        return Ok(CredentialOutcome::Rejected {
            error: format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        });
    }

    let existing = sqlx::query("SELECT id FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        return Ok(CredentialOutcome::Rejected { error: "Email already registered".to_owned() });
    }

    let row = sqlx::query("INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id")
        .bind(&email)
        .bind(hash_password(password))
        .fetch_one(pool)
        .await?;

    Ok(CredentialOutcome::Accepted { user_id: row.get("id") })
}

/// Check an existing user's credentials.
///
/// The same rejection message covers unknown email and wrong password so
/// the endpoint does not leak which emails are registered.
///
/// # Errors
///
/// Returns a database error if the lookup fails.
pub async fn sign_in(pool: &PgPool, email: &str, password: &str) -> Result<CredentialOutcome, CredentialError> {
    let rejected = || CredentialOutcome::Rejected { error: "Invalid credentials".to_owned() };

    let Some(email) = normalize_email(email) else {
        return Ok(rejected());
    };

    let row = sqlx::query("SELECT id, password_hash FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(rejected());
    };
    let stored: String = row.get("password_hash");
    if !verify_password(&stored, password) {
        return Ok(rejected());
    }

    Ok(CredentialOutcome::Accepted { user_id: row.get("id") })
}
