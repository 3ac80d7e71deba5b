//! # pulse-auth
//!
//! Credential handling for the MarketPulse CLI.
//!
//! Passwords are stored as SHA-256 hex digests. A successful login writes a
//! session file into the data directory (see [`session`]); the gated commands
//! only check that it exists.

pub mod credentials;
pub mod demo;
pub mod error;
pub mod password;
pub mod session;

pub use credentials::{SignupRequest, login, profile, signup};
pub use error::AuthError;
pub use session::{Session, SessionStore};

use std::path::Path;

/// Clear the stored session for `data_dir`. Returns whether one existed.
///
/// # Errors
///
/// Returns `AuthError::SessionStore` if the session file cannot be removed.
pub fn logout(data_dir: &Path) -> Result<bool, AuthError> {
    SessionStore::new(data_dir).delete()
}
