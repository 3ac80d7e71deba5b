//! Local session file.
//!
//! `mpulse auth login` writes `<data_dir>/session.json`; its presence is the
//! only check the gated commands make.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pulse_core::entities::User;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const SESSION_FILE_NAME: &str = "session.json";

/// What login remembers about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub key: String,
    pub name: String,
    pub enterprise_name: String,
    pub activity: String,
    pub classification_code: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    #[must_use]
    pub fn for_user(user: &User, now: DateTime<Utc>) -> Self {
        Self {
            key: user.key.clone(),
            name: user.name.clone(),
            enterprise_name: user.enterprise_name.clone(),
            activity: user.activity.clone(),
            classification_code: user.classification_code.clone(),
            logged_in_at: now,
        }
    }
}

/// Reads and writes the session file inside one data directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE_NAME),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file cannot be written.
    pub fn store(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStore(format!("encode session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", self.path.display());
            }
        }

        tracing::debug!(key = %session.key, "session stored");
        Ok(())
    }

    /// The current session, if any. An unreadable or malformed file counts
    /// as no session.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(error) => {
                tracing::warn!(%error, path = %self.path.display(), "ignoring malformed session file");
                None
            }
        }
    }

    /// The current session, or `NotAuthenticated`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` when no session file is present.
    pub fn require(&self) -> Result<Session, AuthError> {
        self.load().ok_or(AuthError::NotAuthenticated)
    }

    /// Remove the session file. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::SessionStore` if the file exists but cannot be removed.
    pub fn delete(&self) -> Result<bool, AuthError> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).map_err(|e| {
            AuthError::SessionStore(format!("failed to delete {}: {e}", self.path.display()))
        })?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn session() -> Session {
        Session {
            key: "test@user.com".into(),
            name: "Test User".into(),
            enterprise_name: "TestCorp MSME Garments Co.".into(),
            activity: "Textile & Apparel".into(),
            classification_code: "6101".into(),
            logged_in_at: Utc.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn store_load_delete_cycle() {
        let tmp = TempDir::new().unwrap();
        let store = SessionStore::new(&tmp.path().join("data"));
        assert!(store.load().is_none());

        store.store(&session()).unwrap();
        assert_eq!(store.load(), Some(session()));
        assert_eq!(store.require().unwrap(), session());

        assert!(store.delete().unwrap());
        assert!(!store.delete().unwrap());
        assert!(matches!(store.require(), Err(AuthError::NotAuthenticated)));
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let store = SessionStore::new(tmp.path());
        store.store(&session()).unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "session file should be 0600");
    }

    #[test]
    fn malformed_file_means_logged_out() {
        let tmp = TempDir::new().unwrap();
        let store = SessionStore::new(tmp.path());
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_none());
    }
}
