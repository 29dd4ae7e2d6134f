//! Environment management and backend connection handling for keyspace
//!
//! This crate owns the process-wide active [`Environment`] (the namespace
//! prefix and connection target every operation consults), the stack-based
//! [`registry`] that switches environments for tests and tools, and the
//! [`Database`] handle that operations use to reach the backend.

#![warn(clippy::all)]

pub mod database;
pub mod env;
pub mod registry;

pub use database::Database;
pub use env::Environment;

#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());
