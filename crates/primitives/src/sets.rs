//! Set operations

use crate::store::Store;
use keyspace_core::{Result, StoreKey};

impl Store {
    /// All members of the set at `key`. A never-written set is empty.
    pub async fn set_members<K: StoreKey>(&self, key: &K) -> Result<Vec<String>> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let members: Vec<String> = redis::cmd("SMEMBERS")
            .arg(&storage_key)
            .query_async(&mut conn)
            .await?;
        Ok(members)
    }

    /// Whether `member` is in the set at `key`.
    pub async fn is_set_member<K: StoreKey>(&self, key: &K, member: &str) -> Result<bool> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let found: bool = redis::cmd("SISMEMBER")
            .arg(&storage_key)
            .arg(member)
            .query_async(&mut conn)
            .await?;
        Ok(found)
    }

    /// Add members to the set at `key`. No-op on empty input.
    pub async fn add_set_members<K: StoreKey>(&self, key: &K, members: &[&str]) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("SADD")
            .arg(&storage_key)
            .arg(members)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Remove members from the set at `key`. No-op on empty input.
    pub async fn remove_set_members<K: StoreKey>(&self, key: &K, members: &[&str]) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("SREM")
            .arg(&storage_key)
            .arg(members)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
