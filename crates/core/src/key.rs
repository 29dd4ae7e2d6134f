//! Key identities and computed storage keys
//!
//! A [`StoreKey`] pairs a fixed namespace prefix (constant per type) with a
//! per-value identifier. The real backend key is computed as
//! `environment prefix + namespace prefix + identifier`; no operation in this
//! layer accepts a raw string key, which prevents cross-family collisions by
//! construction.
//!
//! ## Contract
//!
//! - `storage_prefix` is the same for every value of the implementing type.
//! - `storage_id` is unique within that prefix.
//! - Two different types must never share a namespace prefix, or their
//!   computed keys can collide. This is an implementation-time invariant:
//!   test it (see [`crate::testing`]), it is not checked at runtime.

/// A key identity: computes the namespaced storage key for one stored value.
pub trait StoreKey {
    /// Fixed namespace prefix identifying this type's key family
    fn storage_prefix(&self) -> &'static str;

    /// Identifier of this value, unique within the namespace prefix
    fn storage_id(&self) -> String;
}

/// Compute the real backend key for `key` under an environment prefix.
pub fn full_key<K: StoreKey + ?Sized>(env_prefix: &str, key: &K) -> String {
    format!("{}{}{}", env_prefix, key.storage_prefix(), key.storage_id())
}

macro_rules! family_key {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl StoreKey for $name {
            fn storage_prefix(&self) -> &'static str {
                $prefix
            }
            fn storage_id(&self) -> String {
                self.0.clone()
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

family_key!(
    /// Key identity for an untyped scalar string value
    StringKey,
    "string:"
);
family_key!(
    /// Key identity for a set of unique members
    SetKey,
    "set:"
);
family_key!(
    /// Key identity for a sorted set of scored members
    SortedSetKey,
    "zset:"
);
family_key!(
    /// Key identity for an ordered list
    ListKey,
    "list:"
);
family_key!(
    /// Key identity for a field-to-value hash
    HashKey,
    "map:"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_key_concatenation() {
        let key = StringKey::from("alpha");
        assert_eq!(full_key("c:", &key), "c:string:alpha");
        assert_eq!(full_key("", &key), "string:alpha");
    }

    #[test]
    fn test_family_prefixes() {
        assert_eq!(StringKey::from("x").storage_prefix(), "string:");
        assert_eq!(SetKey::from("x").storage_prefix(), "set:");
        assert_eq!(SortedSetKey::from("x").storage_prefix(), "zset:");
        assert_eq!(ListKey::from("x").storage_prefix(), "list:");
        assert_eq!(HashKey::from("x").storage_prefix(), "map:");
    }

    #[test]
    fn test_family_prefixes_are_distinct() {
        let prefixes = [
            StringKey::from("x").storage_prefix(),
            SetKey::from("x").storage_prefix(),
            SortedSetKey::from("x").storage_prefix(),
            ListKey::from("x").storage_prefix(),
            HashKey::from("x").storage_prefix(),
        ];
        for (i, a) in prefixes.iter().enumerate() {
            for b in &prefixes[i + 1..] {
                assert_ne!(a, b, "two families share the prefix {a:?}");
            }
        }
    }

    #[test]
    fn test_identifier_round_trips() {
        let key = ListKey::from("queue-7");
        assert_eq!(key.storage_id(), "queue-7");
    }

    #[test]
    fn test_empty_identifier_still_computes() {
        // The empty-id check lives in delete/expire, not in key computation.
        let key = SetKey::from("");
        assert_eq!(full_key("c:", &key), "c:set:");
    }
}
