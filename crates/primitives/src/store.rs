//! Store: the operation facade
//!
//! Holds no state beyond an `Arc<Database>`; clones share the handle. The
//! key-level operations (delete, expire) live here because they apply to
//! every family alike.

use chrono::{DateTime, Utc};
use keyspace_client::Database;
use keyspace_core::{full_key, Result, StoreError, StoreKey};
use redis::aio::ConnectionManager;
use std::sync::Arc;

/// Typed operation facade over one backend handle.
#[derive(Clone, Debug)]
pub struct Store {
    db: Arc<Database>,
}

impl Store {
    /// Wrap an explicit database handle.
    pub fn new(db: Arc<Database>) -> Self {
        Store { db }
    }

    /// Store for the currently active environment.
    pub fn active() -> Result<Self> {
        Ok(Store {
            db: Database::active()?,
        })
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    pub(crate) fn key_for<K: StoreKey + ?Sized>(&self, key: &K) -> String {
        full_key(self.db.key_prefix(), key)
    }

    /// Key computation for destructive operations: an empty identifier is a
    /// programmer error, not a missing value.
    pub(crate) fn checked_key_for<K: StoreKey + ?Sized>(&self, key: &K) -> Result<String> {
        if key.storage_id().is_empty() {
            return Err(StoreError::MissingId {
                prefix: key.storage_prefix().to_string(),
            });
        }
        Ok(self.key_for(key))
    }

    pub(crate) async fn conn(&self) -> Result<ConnectionManager> {
        self.db.conn().await
    }

    /// Delete the entry at `key`'s computed key, whatever its family.
    pub async fn delete<K: StoreKey>(&self, key: &K) -> Result<()> {
        let storage_key = self.checked_key_for(key)?;
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("DEL")
            .arg(&storage_key)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Expire the entry at `key` after `secs` seconds.
    pub async fn expire<K: StoreKey>(&self, key: &K, secs: i64) -> Result<()> {
        let storage_key = self.checked_key_for(key)?;
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("EXPIRE")
            .arg(&storage_key)
            .arg(secs)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Expire the entry at `key` at an absolute instant.
    pub async fn expire_at<K: StoreKey>(&self, key: &K, when: DateTime<Utc>) -> Result<()> {
        let storage_key = self.checked_key_for(key)?;
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("EXPIREAT")
            .arg(&storage_key)
            .arg(when.timestamp())
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
