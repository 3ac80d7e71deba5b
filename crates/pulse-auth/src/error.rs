use pulse_core::errors::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup or login input was rejected. The message is safe to show the user.
    #[error("{0}")]
    Validation(String),

    /// Unknown key or wrong password. The two are not distinguished.
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("user already exists: {0}")]
    AlreadyExists(String),

    #[error("not authenticated, run `mpulse auth login`")]
    NotAuthenticated,

    #[error("session store error: {0}")]
    SessionStore(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
