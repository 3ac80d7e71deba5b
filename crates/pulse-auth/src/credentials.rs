//! Signup, login and profile lookup against a [`UserStore`].

use chrono::{DateTime, Utc};
use pulse_core::entities::User;
use pulse_core::errors::StoreError;
use pulse_core::store::UserStore;

use crate::error::AuthError;
use crate::password::{hash_password, is_valid_email, validate_password, verify_password};

/// Raw signup input. Fields are trimmed before validation, except the password.
#[derive(Debug, Clone, Default)]
pub struct SignupRequest {
    pub key: String,
    pub password: String,
    pub name: Option<String>,
    pub enterprise_name: String,
    pub activity: String,
    pub classification_code: String,
}

/// Display name for a new user when none was given.
#[must_use]
pub fn default_name(key: &str) -> String {
    match key.split_once('@') {
        Some((local, _)) => local.to_string(),
        None => "User".to_string(),
    }
}

/// Validate `request` and build the record that would be stored.
///
/// # Errors
///
/// Returns `AuthError::Validation` describing the first rule that failed.
pub fn build_user(request: &SignupRequest, now: DateTime<Utc>) -> Result<User, AuthError> {
    let key = request.key.trim();
    let enterprise_name = request.enterprise_name.trim();
    let activity = request.activity.trim();
    let classification_code = request.classification_code.trim();

    if [key, enterprise_name, activity, classification_code]
        .iter()
        .any(|field| field.is_empty())
        || request.password.is_empty()
    {
        return Err(AuthError::Validation("All fields are required".into()));
    }
    if key.contains('@') && !is_valid_email(key) {
        return Err(AuthError::Validation("Invalid email format".into()));
    }
    validate_password(&request.password)?;

    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| default_name(key), String::from);

    Ok(User {
        key: key.to_string(),
        password_hash: hash_password(&request.password),
        name,
        enterprise_name: enterprise_name.to_string(),
        activity: activity.to_string(),
        classification_code: classification_code.to_string(),
        created_at: now,
    })
}

/// Register a new user.
///
/// # Errors
///
/// Returns `AuthError::Validation` for bad input, `AuthError::AlreadyExists`
/// if the key is taken, or `AuthError::Store` if the store fails.
pub async fn signup<S>(store: &S, request: &SignupRequest) -> Result<User, AuthError>
where
    S: UserStore + ?Sized,
{
    let user = build_user(request, Utc::now())?;
    match store.put_user(&user).await {
        Ok(()) => {
            tracing::info!(key = %user.key, "user registered");
            Ok(user)
        }
        Err(StoreError::DuplicateKey(key)) => Err(AuthError::AlreadyExists(key)),
        Err(other) => Err(other.into()),
    }
}

/// Check `key` and `password` and return the stored user.
///
/// # Errors
///
/// Returns `AuthError::Validation` when either field is blank,
/// `AuthError::InvalidCredentials` for an unknown key or a wrong password
/// alike, or `AuthError::Store` if the store fails.
pub async fn login<S>(store: &S, key: &str, password: &str) -> Result<User, AuthError>
where
    S: UserStore + ?Sized,
{
    let key = key.trim();
    if key.is_empty() || password.is_empty() {
        return Err(AuthError::Validation(
            "Email and password are required".into(),
        ));
    }
    let Some(user) = store.get_user(key).await? else {
        tracing::debug!(key, "login for unknown key");
        return Err(AuthError::InvalidCredentials);
    };
    if !verify_password(password, &user.password_hash) {
        tracing::debug!(key, "login with wrong password");
        return Err(AuthError::InvalidCredentials);
    }
    Ok(user)
}

/// Fetch the full record behind an authenticated key.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` if the key no longer resolves.
pub async fn profile<S>(store: &S, key: &str) -> Result<User, AuthError>
where
    S: UserStore + ?Sized,
{
    store
        .get_user(key)
        .await?
        .ok_or(AuthError::NotAuthenticated)
}
