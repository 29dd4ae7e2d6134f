//! Typed operations over the keyspace backend
//!
//! [`Store`] is a stateless facade over a [`keyspace_client::Database`]
//! handle. One method per backend command, grouped by data-structure family:
//!
//! - key-level: `delete`, `expire`, `expire_at`
//! - strings: `fetch_string`, `store_string`
//! - sets: `set_members`, `is_set_member`, `add_set_members`,
//!   `remove_set_members`
//! - sorted sets: `sorted_range_by_index`, `sorted_range_by_score`,
//!   `add_scored_member`, `remove_scored_member`, `member_score`
//! - lists: `list_range`, `push_left`, `push_right`, `remove_occurrences`,
//!   `rotate_blocking`, `move_one`
//! - hashes: `hash_get`, `hash_set`, `hash_get_all`, `hash_field_names`,
//!   `hash_remove`
//!
//! plus the object combinators (`load`, `save`) and cursor-based scans
//! (`scan_ids`, `scan_objects`, `scan_strings`).
//!
//! Every operation is a single backend round-trip and is atomic exactly as
//! far as the underlying command is. Dropping an operation's future cancels
//! it.

#![warn(clippy::all)]

mod hashes;
mod lists;
mod objects;
mod scan;
mod sets;
mod sorted_sets;
mod store;
mod strings;

pub use lists::ListEnd;
pub use scan::{IdScan, ObjectScan, StringScan};
pub use store::Store;
