//! Test support for key and codec implementations
//!
//! Every domain type that declares a [`StoreKey`] or [`StoreValue`] should
//! validate the declaration with these helpers in its own tests.

use crate::key::StoreKey;
use crate::value::StoreValue;

/// Assert that a key identity exposes the expected prefix and identifier.
///
/// # Panics
///
/// Panics when either accessor disagrees with the expectation.
pub fn assert_key_shape<K: StoreKey>(key: &K, prefix: &str, id: &str) {
    assert_eq!(
        key.storage_prefix(),
        prefix,
        "storage_prefix returned {:?}, expected {:?}",
        key.storage_prefix(),
        prefix
    );
    assert_eq!(
        key.storage_id(),
        id,
        "storage_id returned {:?}, expected {:?}",
        key.storage_id(),
        id
    );
}

/// Assert that a value codec round-trips `source` into `target`.
///
/// Hand it two values that differ, plus a comparator; `source` is
/// serialized, deserialized into `target`, and the two must then agree.
///
/// # Panics
///
/// Panics when the values agree up front, when either codec direction
/// fails, or when the round trip loses data.
pub fn assert_codec_round_trip<V, F>(source: &V, target: &mut V, eq: F)
where
    V: StoreValue,
    F: Fn(&V, &V) -> bool,
{
    assert!(
        !eq(source, target),
        "values must differ before the round trip"
    );
    let bytes = source.to_store().expect("serialization failed");
    target.from_store(&bytes).expect("deserialization failed");
    assert!(
        eq(source, target),
        "values must agree after the round trip"
    );
}
