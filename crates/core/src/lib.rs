//! Core types and traits for keyspace
//!
//! This crate defines the two capabilities every stored value is built from:
//! - [`StoreKey`]: computes a namespaced storage key (prefix + identifier)
//! - [`StoreValue`]: converts a domain value to/from stored bytes
//!
//! plus the error vocabulary ([`StoreError`]) shared by every operation, the
//! standard [`codec`] helpers, and test support for validating trait
//! implementations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fingerprint;
pub mod key;
pub mod testing;
pub mod value;

pub use error::{Result, StoreError};
pub use fingerprint::fingerprint;
pub use key::{full_key, HashKey, ListKey, SetKey, SortedSetKey, StoreKey, StringKey};
pub use value::{codec, Storable, StoreValue};
