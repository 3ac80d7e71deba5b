//! Built-in demo accounts created by `mpulse init`.
//!
//! These bypass signup validation: `demo123` is shorter than the signup
//! minimum.

use chrono::Utc;
use pulse_core::entities::User;
use pulse_core::errors::StoreError;
use pulse_core::store::UserStore;

use crate::error::AuthError;
use crate::password::hash_password;

struct DemoAccount {
    key: &'static str,
    password: &'static str,
    name: &'static str,
    enterprise_name: &'static str,
    activity: &'static str,
    classification_code: &'static str,
}

const DEMO_ACCOUNTS: [DemoAccount; 2] = [
    DemoAccount {
        key: "test@user.com",
        password: "testpassword",
        name: "Test User",
        enterprise_name: "TestCorp MSME Garments Co.",
        activity: "Textile & Apparel",
        classification_code: "6101",
    },
    DemoAccount {
        key: "demo@marketpulse.com",
        password: "demo123",
        name: "Demo User",
        enterprise_name: "Demo Electronics Ltd.",
        activity: "Electronics Manufacturing",
        classification_code: "8542",
    },
];

/// Insert the demo accounts that are not registered yet. Returns how many
/// were created.
///
/// # Errors
///
/// Returns `AuthError::Store` if the store fails for a reason other than an
/// existing key.
pub async fn seed_demo_users<S>(store: &S) -> Result<usize, AuthError>
where
    S: UserStore + ?Sized,
{
    let now = Utc::now();
    let mut created = 0;
    for account in &DEMO_ACCOUNTS {
        let user = User {
            key: account.key.into(),
            password_hash: hash_password(account.password),
            name: account.name.into(),
            enterprise_name: account.enterprise_name.into(),
            activity: account.activity.into(),
            classification_code: account.classification_code.into(),
            created_at: now,
        };
        match store.put_user(&user).await {
            Ok(()) => created += 1,
            Err(StoreError::DuplicateKey(_)) => {}
            Err(other) => return Err(other.into()),
        }
    }
    tracing::info!(created, "demo users seeded");
    Ok(created)
}
