use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::constants::{ERR_CSRF_EXPIRED, ERR_CSRF_INVALID, ERR_CSRF_MISSING};

type HmacSha256 = Hmac<Sha256>;

// =============================================================================
// HMAC Primitives
// =============================================================================

/// Hex-encoded HMAC-SHA256 of `data` under `secret`
pub fn sign_hmac(data: &str, secret: &str) -> String {
    // HMAC accepts keys of any length, so this cannot fail
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC key of any size is valid"));
    mac.update(data.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a hex-encoded HMAC-SHA256 signature in constant time
pub fn verify_hmac(data: &str, signature: &str, secret: &str) -> bool {
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            tracing::error!("Failed to create HMAC instance");
            return false;
        }
    };

    mac.update(data.as_bytes());

    let sig_bytes = match hex::decode(signature) {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!("Invalid hex signature format");
            return false;
        }
    };

    mac.verify_slice(&sig_bytes).is_ok()
}

/// Whether `timestamp` is no more than `max_age_secs` in the past
///
/// Tokens stamped in the future are rejected as well, with the same tolerance.
pub fn validate_timestamp(timestamp: i64, now: i64, max_age_secs: i64) -> bool {
    let age_seconds = (now - timestamp).abs();

    if age_seconds > max_age_secs {
        tracing::debug!(
            "Timestamp out of range: {} seconds (max: {})",
            age_seconds,
            max_age_secs
        );
        return false;
    }

    true
}

// =============================================================================
// Anti-Forgery Tokens
// =============================================================================

/// Why a submitted anti-forgery token was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsrfError {
    Missing,
    Invalid,
    Expired,
}

impl CsrfError {
    pub fn message(self) -> &'static str {
        match self {
            CsrfError::Missing => ERR_CSRF_MISSING,
            CsrfError::Invalid => ERR_CSRF_INVALID,
            CsrfError::Expired => ERR_CSRF_EXPIRED,
        }
    }
}

/// Issue a token for the add form
///
/// Format: `<issued_unix_ts>.<hex HMAC-SHA256(secret, issued_unix_ts)>`
pub fn issue_csrf_token(secret: &str) -> String {
    issue_csrf_token_at(secret, chrono::Utc::now().timestamp())
}

pub fn issue_csrf_token_at(secret: &str, issued_at: i64) -> String {
    let stamp = issued_at.to_string();
    let signature = sign_hmac(&stamp, secret);
    format!("{}.{}", stamp, signature)
}

/// Check a submitted token against the secret and lifetime
pub fn verify_csrf_token(token: &str, secret: &str, max_age_secs: i64) -> Result<(), CsrfError> {
    verify_csrf_token_at(token, secret, max_age_secs, chrono::Utc::now().timestamp())
}

pub fn verify_csrf_token_at(
    token: &str,
    secret: &str,
    max_age_secs: i64,
    now: i64,
) -> Result<(), CsrfError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CsrfError::Missing);
    }

    let (stamp, signature) = token.split_once('.').ok_or(CsrfError::Invalid)?;
    let issued_at: i64 = stamp.parse().map_err(|_| CsrfError::Invalid)?;

    if !verify_hmac(stamp, signature, secret) {
        tracing::warn!("Anti-forgery token with bad signature");
        return Err(CsrfError::Invalid);
    }

    if !validate_timestamp(issued_at, now, max_age_secs) {
        return Err(CsrfError::Expired);
    }

    Ok(())
}
