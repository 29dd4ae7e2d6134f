//! Keyspace - typed persistence over a Redis-backed keyspace
//!
//! Application code declares that a domain value lives at a computed key of
//! a given shape, then reads, writes, enumerates, and expires values
//! without re-deriving key strings or duplicating serialization code.
//!
//! # Quick Start
//!
//! ```ignore
//! use keyspace::{Store, StringKey};
//!
//! // A store for the active environment
//! let store = Store::active()?;
//!
//! // Store a scalar under the "string:" family
//! store.store_string(&StringKey::from("greeting"), "hello").await?;
//!
//! // Read it back ("" if absent)
//! let value = store.fetch_string(&StringKey::from("greeting")).await?;
//! ```
//!
//! # Architecture
//!
//! Record types implement [`StoreKey`] (computed key) and [`StoreValue`]
//! (byte codec); every operation on [`Store`] consults the active
//! [`Environment`] for the key prefix and connection target and issues one
//! backend command. The [`registry`] switches environments for tests and
//! tools without restarting the process.

pub use keyspace_client::{registry, Database, Environment};
pub use keyspace_core::{
    codec, fingerprint, full_key, testing, HashKey, ListKey, Result, SetKey, SortedSetKey,
    Storable, StoreError, StoreKey, StoreValue, StringKey,
};
pub use keyspace_primitives::{IdScan, ListEnd, ObjectScan, Store, StringScan};
