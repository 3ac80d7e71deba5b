//! Repository traits for insight and credential storage.
//!
//! The generator and ranking engine only see these traits. `pulse-db`
//! implements them on libSQL; [`MemoryStore`] implements them in memory for
//! tests and offline use.
//!
//! Contract for [`InsightStore::replace_all`]: readers observe either the old
//! set or the new set, never a mix and never an empty intermediate state.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::entities::{Insight, User};
use crate::errors::StoreError;

/// Storage for the current insight set.
#[allow(async_fn_in_trait)]
pub trait InsightStore {
    /// Atomically replace every stored insight with `insights`.
    async fn replace_all(&self, insights: &[Insight]) -> Result<(), StoreError>;

    /// Load every stored insight in insertion order.
    async fn load_all(&self) -> Result<Vec<Insight>, StoreError>;
}

/// Storage for credential records, keyed by email or phone.
#[allow(async_fn_in_trait)]
pub trait UserStore {
    async fn get_user(&self, key: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Fails with [`StoreError::DuplicateKey`] if the key is taken.
    async fn put_user(&self, user: &User) -> Result<(), StoreError>;

    async fn count_users(&self) -> Result<u64, StoreError>;
}

/// In-memory store. Can be switched into a failing mode to exercise
/// storage-unavailable paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    insights: Mutex<Vec<Insight>>,
    users: Mutex<BTreeMap<String, User>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".into())
}

impl InsightStore for MemoryStore {
    async fn replace_all(&self, insights: &[Insight]) -> Result<(), StoreError> {
        self.check()?;
        let mut guard = self.insights.lock().map_err(poisoned)?;
        *guard = insights.to_vec();
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<Insight>, StoreError> {
        self.check()?;
        Ok(self.insights.lock().map_err(poisoned)?.clone())
    }
}

impl UserStore for MemoryStore {
    async fn get_user(&self, key: &str) -> Result<Option<User>, StoreError> {
        self.check()?;
        Ok(self.users.lock().map_err(poisoned)?.get(key).cloned())
    }

    async fn put_user(&self, user: &User) -> Result<(), StoreError> {
        self.check()?;
        let mut guard = self.users.lock().map_err(poisoned)?;
        if guard.contains_key(&user.key) {
            return Err(StoreError::DuplicateKey(user.key.clone()));
        }
        guard.insert(user.key.clone(), user.clone());
        Ok(())
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        self.check()?;
        Ok(self.users.lock().map_err(poisoned)?.len() as u64)
    }
}
