//! Storage error shared by every repository backend.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `AuthError`) are defined in
//! their respective crates and convert into or wrap [`StoreError`] at the
//! [`crate::store`] seam.

use thiserror::Error;

/// Errors reported by [`crate::store`] implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or the operation failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A record with the same key already exists.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// A stored row could not be decoded into an entity.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}
