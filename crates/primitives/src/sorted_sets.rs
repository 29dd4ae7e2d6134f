//! Sorted-set operations

use crate::store::Store;
use keyspace_core::{Result, StoreError, StoreKey};

impl Store {
    /// Members between `start` and `end` index, ascending by score.
    ///
    /// An `end` of `-1` means "to the last member".
    pub async fn sorted_range_by_index<K: StoreKey>(
        &self,
        key: &K,
        start: i64,
        end: i64,
    ) -> Result<Vec<String>> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let members: Vec<String> = redis::cmd("ZRANGE")
            .arg(&storage_key)
            .arg(start)
            .arg(end)
            .query_async(&mut conn)
            .await?;
        Ok(members)
    }

    /// Members whose score lies in `[min, max]`, ascending by score.
    pub async fn sorted_range_by_score<K: StoreKey>(
        &self,
        key: &K,
        min: f64,
        max: f64,
    ) -> Result<Vec<String>> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let members: Vec<String> = redis::cmd("ZRANGEBYSCORE")
            .arg(&storage_key)
            .arg(min)
            .arg(max)
            .query_async(&mut conn)
            .await?;
        Ok(members)
    }

    /// Add `member` with `score`, or update its score if present.
    pub async fn add_scored_member<K: StoreKey>(
        &self,
        key: &K,
        score: f64,
        member: &str,
    ) -> Result<()> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("ZADD")
            .arg(&storage_key)
            .arg(score)
            .arg(member)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Remove `member` from the sorted set at `key`.
    pub async fn remove_scored_member<K: StoreKey>(&self, key: &K, member: &str) -> Result<()> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("ZREM")
            .arg(&storage_key)
            .arg(member)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Score of `member`; `NotFound` when the member is absent.
    pub async fn member_score<K: StoreKey>(&self, key: &K, member: &str) -> Result<f64> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let score: Option<f64> = redis::cmd("ZSCORE")
            .arg(&storage_key)
            .arg(member)
            .query_async(&mut conn)
            .await?;
        score.ok_or_else(|| StoreError::NotFound(format!("{storage_key} member {member:?}")))
    }
}
