//! List operations
//!
//! Includes the one suspending primitive in the layer, [`Store::rotate_blocking`],
//! which rotates a single list: it pops at one end and re-pushes at the
//! other, blocking until an element exists. Consumers polling a shared list
//! with it see entries round-robin rather than draining them.

use crate::store::Store;
use keyspace_core::{Result, StoreError, StoreKey};
use std::time::Duration;

/// One end of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEnd {
    /// The head of the list
    Left,
    /// The tail of the list
    Right,
}

impl ListEnd {
    /// Command argument form
    pub fn as_arg(self) -> &'static str {
        match self {
            ListEnd::Left => "LEFT",
            ListEnd::Right => "RIGHT",
        }
    }

    /// The other end
    pub fn opposite(self) -> ListEnd {
        match self {
            ListEnd::Left => ListEnd::Right,
            ListEnd::Right => ListEnd::Left,
        }
    }
}

impl Store {
    /// Elements between `start` and `end` index. A never-written list is
    /// empty; an `end` of `-1` means "to the last element".
    pub async fn list_range<K: StoreKey>(
        &self,
        key: &K,
        start: i64,
        end: i64,
    ) -> Result<Vec<String>> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let elements: Vec<String> = redis::cmd("LRANGE")
            .arg(&storage_key)
            .arg(start)
            .arg(end)
            .query_async(&mut conn)
            .await?;
        Ok(elements)
    }

    /// Push elements at the head of the list. No-op on empty input.
    pub async fn push_left<K: StoreKey>(&self, key: &K, elements: &[&str]) -> Result<()> {
        self.push(key, ListEnd::Left, elements).await
    }

    /// Push elements at the tail of the list. No-op on empty input.
    pub async fn push_right<K: StoreKey>(&self, key: &K, elements: &[&str]) -> Result<()> {
        self.push(key, ListEnd::Right, elements).await
    }

    async fn push<K: StoreKey>(&self, key: &K, end: ListEnd, elements: &[&str]) -> Result<()> {
        if elements.is_empty() {
            return Ok(());
        }
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let command = match end {
            ListEnd::Left => "LPUSH",
            ListEnd::Right => "RPUSH",
        };
        let _: i64 = redis::cmd(command)
            .arg(&storage_key)
            .arg(elements)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Remove occurrences of `element` from the list.
    ///
    /// A positive `count` removes that many from the head, a negative one
    /// from the tail, and zero removes every occurrence.
    pub async fn remove_occurrences<K: StoreKey>(
        &self,
        key: &K,
        count: i64,
        element: &str,
    ) -> Result<()> {
        let storage_key = self.key_for(key);
        let mut conn = self.conn().await?;
        let _: i64 = redis::cmd("LREM")
            .arg(&storage_key)
            .arg(count)
            .arg(element)
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    /// Pop one element at `from` and re-push it at the opposite end of the
    /// same list, suspending until an element exists.
    ///
    /// Returns the rotated element, [`StoreError::Timeout`] when `timeout`
    /// elapses first, or a backend error — never a silent empty result.
    /// Runs on a dedicated connection so the wait cannot stall other
    /// operations; dropping the future abandons the wait.
    pub async fn rotate_blocking<K: StoreKey>(
        &self,
        key: &K,
        from: ListEnd,
        timeout: Duration,
    ) -> Result<String> {
        let storage_key = self.key_for(key);
        tracing::trace!(key = %storage_key, from = from.as_arg(), "blocking rotate");
        let mut conn = self.database().blocking_conn().await?;
        let element: Option<String> = redis::cmd("BLMOVE")
            .arg(&storage_key)
            .arg(&storage_key)
            .arg(from.as_arg())
            .arg(from.opposite().as_arg())
            .arg(timeout.as_secs_f64())
            .query_async(&mut conn)
            .await?;
        element.ok_or(StoreError::Timeout { key: storage_key })
    }

    /// Pop one element from `src` at `from` and push it onto `dst` at `to`.
    ///
    /// Fails immediately with `NotFound` when `src` is empty; never blocks.
    pub async fn move_one<S: StoreKey, D: StoreKey>(
        &self,
        src: &S,
        dst: &D,
        from: ListEnd,
        to: ListEnd,
    ) -> Result<String> {
        let src_key = self.key_for(src);
        let dst_key = self.key_for(dst);
        let mut conn = self.conn().await?;
        let element: Option<String> = redis::cmd("LMOVE")
            .arg(&src_key)
            .arg(&dst_key)
            .arg(from.as_arg())
            .arg(to.as_arg())
            .query_async(&mut conn)
            .await?;
        element.ok_or(StoreError::NotFound(src_key))
    }
}
