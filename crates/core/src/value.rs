//! Value codecs for stored records
//!
//! A [`StoreValue`] converts a domain value to and from the backend's byte
//! representation. Deserialization fully replaces the receiver's prior
//! state; it never merges fields.
//!
//! Most record types use the standard [`codec`] helpers (bincode over serde)
//! so the trait impl is two lines:
//!
//! ```
//! use keyspace_core::{codec, Result, StoreValue};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default, Serialize, Deserialize)]
//! struct Profile {
//!     id: String,
//!     label: String,
//! }
//!
//! impl StoreValue for Profile {
//!     fn to_store(&self) -> Result<Vec<u8>> {
//!         codec::encode(self)
//!     }
//!     fn from_store(&mut self, bytes: &[u8]) -> Result<()> {
//!         *self = codec::decode(bytes)?;
//!         Ok(())
//!     }
//! }
//! ```

use crate::error::Result;
use crate::key::StoreKey;

/// A value codec: maps a domain value to and from stored bytes.
pub trait StoreValue {
    /// Serialize this value to the bytes stored at its key
    fn to_store(&self) -> Result<Vec<u8>>;

    /// Replace this value's state from stored bytes.
    ///
    /// Implementations must fully reset the receiver before populating it; a
    /// successful call leaves no field from before the call.
    fn from_store(&mut self, bytes: &[u8]) -> Result<()>;
}

/// A storable object: key identity and value codec on one domain type.
///
/// This is the unit manipulated by load/save and the object scans.
pub trait Storable: StoreKey + StoreValue {}

impl<T: StoreKey + StoreValue> Storable for T {}

/// Standard byte codec used by record types: bincode over serde.
pub mod codec {
    use crate::error::Result;
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    /// Encode a serde-serializable value to stored bytes
    pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
        Ok(bincode::serialize(value)?)
    }

    /// Decode stored bytes into an owned value
    pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
        Ok(bincode::deserialize(bytes)?)
    }
}
