//! # pulse-db
//!
//! libSQL storage for MarketPulse.
//!
//! Holds the current insight set and the credential records. Implements the
//! `pulse-core` repository traits so the generator and ranking engine never
//! see SQL.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local-only mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
mod store;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;
use pulse_config::PulseConfig;

/// Central database handle for all MarketPulse state.
///
/// Wraps a libSQL database and connection. Repository methods live in
/// [`repos`] as `impl PulseDb` blocks.
pub struct PulseDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PulseDb {
    /// Open a local-only database at the given path.
    ///
    /// Runs migrations automatically on first open. Pass `":memory:"` for a
    /// throwaway database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let pulse_db = Self { db, conn };
        pulse_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(pulse_db)
    }

    /// Open the database the configuration points at, creating its parent
    /// directory when needed.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the directory cannot be
    /// created, otherwise as [`Self::open_local`].
    pub async fn open(config: &PulseConfig) -> Result<Self, DatabaseError> {
        if config.database.is_in_memory() {
            return Self::open_local(":memory:").await;
        }

        let path = config.database_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatabaseError::InvalidState(format!(
                    "cannot create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Self::open_local(&path_str(&path)?).await
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

fn path_str(path: &Path) -> Result<String, DatabaseError> {
    path.to_str().map(String::from).ok_or_else(|| {
        DatabaseError::InvalidState(format!("database path is not UTF-8: {}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> PulseDb {
        PulseDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["insights", "users"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn users_key_is_unique() {
        let db = test_db().await;
        let insert = "INSERT INTO users (key, password_hash, name) VALUES ('a@b.co', 'h', 'A')";
        db.conn().execute(insert, ()).await.unwrap();
        let result = db.conn().execute(insert, ()).await;
        assert!(result.is_err(), "duplicate user key should be rejected");
    }

    #[tokio::test]
    async fn open_from_config_creates_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = PulseConfig::default();
        config.general.data_dir = dir.path().join("nested").to_string_lossy().into_owned();

        let _db = PulseDb::open(&config).await.unwrap();
        assert!(config.database_path().exists());
    }

    #[tokio::test]
    async fn open_from_config_in_memory() {
        let mut config = PulseConfig::default();
        config.database.path = ":memory:".into();
        let db = PulseDb::open(&config).await.unwrap();
        assert_eq!(db.count_users().await.unwrap(), 0);
    }
}
