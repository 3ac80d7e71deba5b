//! Password hashing and signup field validation.

use std::sync::LazyLock;

use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_CHARS: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

/// Hex-encoded SHA-256 of `password`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[must_use]
pub fn verify_password(password: &str, expected_hash: &str) -> bool {
    hash_password(password).eq_ignore_ascii_case(expected_hash)
}

/// # Errors
///
/// Returns `AuthError::Validation` if the password is too short or has no letter.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(AuthError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters long"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(AuthError::Validation(
            "Password must contain at least one letter".into(),
        ));
    }
    Ok(())
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
