//! Credential repository keyed by email address or phone number.

use pulse_core::entities::User;

use crate::PulseDb;
use crate::error::DatabaseError;
use crate::helpers::{is_unique_violation, parse_datetime};

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        key: row.get::<String>(0)?,
        password_hash: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
        enterprise_name: row.get::<String>(3)?,
        activity: row.get::<String>(4)?,
        classification_code: row.get::<String>(5)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

impl PulseDb {
    /// Insert a new credential record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Duplicate` if the key is already registered.
    pub async fn create_user(&self, user: &User) -> Result<(), DatabaseError> {
        let result = self
            .conn()
            .execute(
                "INSERT INTO users (key, password_hash, name, enterprise_name, activity,
                    classification_code, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    user.key.as_str(),
                    user.password_hash.as_str(),
                    user.name.as_str(),
                    user.enterprise_name.as_str(),
                    user.activity.as_str(),
                    user.classification_code.as_str(),
                    user.created_at.to_rfc3339()
                ],
            )
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(DatabaseError::Duplicate(user.key.clone())),
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user by exact key.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the row cannot be decoded.
    pub async fn get_user_by_key(&self, key: &str) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT key, password_hash, name, enterprise_name, activity,
                    classification_code, created_at
                 FROM users WHERE key = ?1",
                [key],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Number of registered users.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_users(&self) -> Result<u64, DatabaseError> {
        let mut rows = self.conn().query("SELECT COUNT(*) FROM users", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::InvalidState(format!("user count: {e}")))
    }
}
