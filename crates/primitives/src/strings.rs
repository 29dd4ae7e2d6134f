//! Scalar string operations

use crate::store::Store;
use keyspace_core::{Result, StoreKey};

impl Store {
    /// Fetch the string at `key`.
    ///
    /// A missing key yields an empty string with no error; this family is
    /// the one place the layer downgrades absence, and distinguishing
    /// "empty" from "absent" is the caller's business.
    pub async fn fetch_string<K: StoreKey>(&self, key: &K) -> Result<String> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let value: Option<String> = redis::cmd("GET")
            .arg(&storage_key)
            .query_async(&mut conn)
            .await?;
        Ok(value.unwrap_or_default())
    }

    /// Store a string at `key`, unconditionally overwriting.
    pub async fn store_string<K: StoreKey>(&self, key: &K, value: &str) -> Result<()> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: () = redis::cmd("SET")
            .arg(&storage_key)
            .arg(value)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
