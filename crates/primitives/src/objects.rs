//! Object combinators: load and save whole records

use crate::store::Store;
use keyspace_core::{Result, Storable, StoreError};

impl Store {
    /// Load the record stored at `obj`'s computed key into `obj`.
    ///
    /// Returns `NotFound` when the key is absent; in that case `obj`'s
    /// prior field values are left untouched, so callers must not assume a
    /// reset. On success the stored bytes fully replace `obj`'s state.
    pub async fn load<T: Storable>(&self, obj: &mut T) -> Result<()> {
        let storage_key = self.key_for(obj);
        tracing::trace!(key = %storage_key, "load");
        let mut conn = self.conn().await?;
        let bytes: Option<Vec<u8>> = redis::cmd("GET")
            .arg(&storage_key)
            .query_async(&mut conn)
            .await?;
        match bytes {
            None => Err(StoreError::NotFound(storage_key)),
            Some(bytes) => obj.from_store(&bytes),
        }
    }

    /// Serialize `obj` and write it at its computed key, unconditionally
    /// overwriting.
    ///
    /// Load/save offers no isolation against concurrent writers; callers
    /// needing compare-and-swap embed a fingerprint field in the record and
    /// check it before saving.
    pub async fn save<T: Storable>(&self, obj: &T) -> Result<()> {
        let storage_key = self.key_for(obj);
        tracing::trace!(key = %storage_key, "save");
        let bytes = obj.to_store()?;
        let mut conn = self.conn().await?;
        let _: () = redis::cmd("SET")
            .arg(&storage_key)
            .arg(bytes)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }
}
