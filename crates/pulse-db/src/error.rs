//! Database error types for pulse-db.

use pulse_core::errors::StoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Insert hit a unique constraint.
    #[error("Duplicate key: {0}")]
    Duplicate(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

impl From<DatabaseError> for StoreError {
    fn from(error: DatabaseError) -> Self {
        match error {
            DatabaseError::Duplicate(key) => Self::DuplicateKey(key),
            DatabaseError::Query(msg) | DatabaseError::InvalidState(msg) => Self::Corrupt(msg),
            other => Self::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_maps_to_duplicate_key() {
        let err: StoreError = DatabaseError::Duplicate("a@b.co".into()).into();
        assert!(matches!(err, StoreError::DuplicateKey(key) if key == "a@b.co"));
    }

    #[test]
    fn decode_failures_map_to_corrupt() {
        let err: StoreError = DatabaseError::Query("bad date".into()).into();
        assert!(matches!(err, StoreError::Corrupt(_)));
    }

    #[test]
    fn connection_failures_map_to_unavailable() {
        let err: StoreError = DatabaseError::Migration("disk full".into()).into();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
