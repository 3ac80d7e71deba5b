//! `pulse-core` repository traits implemented on libSQL.

use pulse_core::entities::{Insight, User};
use pulse_core::errors::StoreError;
use pulse_core::store::{InsightStore, UserStore};

use crate::PulseDb;

impl InsightStore for PulseDb {
    async fn replace_all(&self, insights: &[Insight]) -> Result<(), StoreError> {
        Ok(self.replace_insights(insights).await?)
    }

    async fn load_all(&self) -> Result<Vec<Insight>, StoreError> {
        Ok(self.list_insights().await?)
    }
}

impl UserStore for PulseDb {
    async fn get_user(&self, key: &str) -> Result<Option<User>, StoreError> {
        Ok(self.get_user_by_key(key).await?)
    }

    async fn put_user(&self, user: &User) -> Result<(), StoreError> {
        Ok(self.create_user(user).await?)
    }

    async fn count_users(&self) -> Result<u64, StoreError> {
        Ok(Self::count_users(self).await?)
    }
}
