//! Cursor-based prefix scans
//!
//! Scans enumerate every stored key matching
//! `environment prefix + namespace prefix + *` one cursor page at a time.
//! They are explicitly not a point-in-time snapshot: entries created or
//! deleted by concurrent writers during a scan may be seen zero or one
//! times, never guaranteed both-or-neither.
//!
//! [`ObjectScan`] deserializes into a caller-owned prototype that is reused
//! across iterations; copy out anything you want to keep past the current
//! iteration.

use crate::store::Store;
use keyspace_core::{Result, StoreKey, StoreValue};
use redis::aio::ConnectionManager;
use std::collections::VecDeque;

/// Cursor page size, matching the backend's SCAN COUNT hint.
const SCAN_PAGE: usize = 20;

/// One page-at-a-time walk over keys matching a pattern.
struct KeyPager {
    conn: ConnectionManager,
    pattern: String,
    cursor: u64,
    buffer: VecDeque<String>,
    done: bool,
}

impl KeyPager {
    fn new(conn: ConnectionManager, pattern: String) -> Self {
        KeyPager {
            conn,
            pattern,
            cursor: 0,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    async fn next_key(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(key) = self.buffer.pop_front() {
                return Ok(Some(key));
            }
            if self.done {
                return Ok(None);
            }
            let (next, keys): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(self.cursor)
                .arg("MATCH")
                .arg(&self.pattern)
                .arg("COUNT")
                .arg(SCAN_PAGE)
                .query_async(&mut self.conn)
                .await?;
            self.cursor = next;
            if next == 0 {
                self.done = true;
            }
            self.buffer.extend(keys);
        }
    }
}

/// Scan yielding bare identifiers, without fetching values.
pub struct IdScan {
    pager: KeyPager,
    strip: String,
}

impl IdScan {
    /// Next identifier (key with the prefixes stripped), or `None` when the
    /// scan is exhausted.
    pub async fn next_id(&mut self) -> Result<Option<String>> {
        let Some(key) = self.pager.next_key().await? else {
            return Ok(None);
        };
        Ok(Some(strip_prefix(&key, &self.strip)))
    }
}

/// Scan yielding whole records, deserialized into a reused prototype.
pub struct ObjectScan {
    pager: KeyPager,
    conn: ConnectionManager,
}

impl ObjectScan {
    /// Deserialize the next record into `proto`.
    ///
    /// Returns `false` when the scan is exhausted, leaving `proto` at its
    /// last value. An entry deleted between the cursor page and the value
    /// fetch counts as unseen and is skipped.
    pub async fn next_into<V: StoreValue>(&mut self, proto: &mut V) -> Result<bool> {
        loop {
            let Some(key) = self.pager.next_key().await? else {
                return Ok(false);
            };
            let bytes: Option<Vec<u8>> = redis::cmd("GET")
                .arg(&key)
                .query_async(&mut self.conn)
                .await?;
            let Some(bytes) = bytes else {
                continue;
            };
            proto.from_store(&bytes)?;
            return Ok(true);
        }
    }
}

/// Scan yielding identifier and raw string value pairs.
pub struct StringScan {
    pager: KeyPager,
    conn: ConnectionManager,
    strip: String,
}

impl StringScan {
    /// Next `(identifier, value)` pair, or `None` when the scan is
    /// exhausted. Entries deleted mid-scan count as unseen.
    pub async fn next_pair(&mut self) -> Result<Option<(String, String)>> {
        loop {
            let Some(key) = self.pager.next_key().await? else {
                return Ok(None);
            };
            let value: Option<String> = redis::cmd("GET")
                .arg(&key)
                .query_async(&mut self.conn)
                .await?;
            let Some(value) = value else {
                continue;
            };
            return Ok(Some((strip_prefix(&key, &self.strip), value)));
        }
    }
}

fn strip_prefix(key: &str, prefix: &str) -> String {
    key.strip_prefix(prefix).unwrap_or(key).to_string()
}

impl Store {
    fn family_pattern<K: StoreKey>(&self, family: &K) -> (String, String) {
        let strip = format!("{}{}", self.database().key_prefix(), family.storage_prefix());
        (format!("{strip}*"), strip)
    }

    /// Scan the identifiers of every entry in `family`'s namespace.
    ///
    /// `family`'s own identifier is ignored; only its namespace prefix
    /// matters.
    pub async fn scan_ids<K: StoreKey>(&self, family: &K) -> Result<IdScan> {
        let (pattern, strip) = self.family_pattern(family);
        Ok(IdScan {
            pager: KeyPager::new(self.conn().await?, pattern),
            strip,
        })
    }

    /// Scan every record in `prototype`'s namespace.
    pub async fn scan_objects<K: StoreKey>(&self, prototype: &K) -> Result<ObjectScan> {
        let (pattern, _) = self.family_pattern(prototype);
        Ok(ObjectScan {
            pager: KeyPager::new(self.conn().await?, pattern),
            conn: self.conn().await?,
        })
    }

    /// Scan every `(identifier, string value)` pair in `family`'s namespace.
    pub async fn scan_strings<K: StoreKey>(&self, family: &K) -> Result<StringScan> {
        let (pattern, strip) = self.family_pattern(family);
        Ok(StringScan {
            pager: KeyPager::new(self.conn().await?, pattern),
            conn: self.conn().await?,
            strip,
        })
    }
}
