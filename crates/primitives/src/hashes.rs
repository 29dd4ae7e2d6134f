//! Hash (field-to-value map) operations

use crate::store::Store;
use keyspace_core::{Result, StoreError, StoreKey};
use std::collections::HashMap;

impl Store {
    /// Value of `field` in the hash at `key`; `NotFound` when the field is
    /// absent.
    pub async fn hash_get<K: StoreKey>(&self, key: &K, field: &str) -> Result<String> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let value: Option<String> = redis::cmd("HGET")
            .arg(&storage_key)
            .arg(field)
            .query_async(&mut conn)
            .await?;
        value.ok_or_else(|| StoreError::NotFound(format!("{storage_key} field {field:?}")))
    }

    /// Set `field` to `value` in the hash at `key`.
    pub async fn hash_set<K: StoreKey>(&self, key: &K, field: &str, value: &str) -> Result<()> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("HSET")
            .arg(&storage_key)
            .arg(field)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Every field and value in the hash at `key`.
    pub async fn hash_get_all<K: StoreKey>(&self, key: &K) -> Result<HashMap<String, String>> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let fields: HashMap<String, String> = redis::cmd("HGETALL")
            .arg(&storage_key)
            .query_async(&mut conn)
            .await?;
        Ok(fields)
    }

    /// Names of every field in the hash at `key`.
    pub async fn hash_field_names<K: StoreKey>(&self, key: &K) -> Result<Vec<String>> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let names: Vec<String> = redis::cmd("HKEYS")
            .arg(&storage_key)
            .query_async(&mut conn)
            .await?;
        Ok(names)
    }

    /// Remove `field` from the hash at `key`.
    pub async fn hash_remove<K: StoreKey>(&self, key: &K, field: &str) -> Result<()> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("HDEL")
            .arg(&storage_key)
            .arg(field)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
