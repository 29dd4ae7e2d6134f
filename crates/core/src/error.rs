//! Error types for keyspace operations
//!
//! Every operation in the layer returns [`StoreError`]. We use `thiserror`
//! for automatic `Display` and `Error` trait implementations.
//!
//! ## Taxonomy
//!
//! - [`StoreError::NotFound`] is ordinary control flow: the key (or member)
//!   does not exist. Callers branch on it via [`StoreError::is_not_found`].
//! - [`StoreError::Backend`] wraps a transport or protocol failure from the
//!   backing store, propagated unmodified.
//! - [`StoreError::Codec`] is a serialization/deserialization failure.
//! - [`StoreError::MissingId`] is programmer misuse (an empty identifier on a
//!   delete/expire) and fails fast.
//! - [`StoreError::Timeout`] is returned only by the blocking list rotation
//!   and means "no data arrived in time", not "this key has no data".
//!
//! The layer never retries and never logs on the caller's behalf; all errors
//! are returned for the caller to decide retry/log/surface policy.

use thiserror::Error;

/// Result type alias for keyspace operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type for keyspace operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Key or member not found; a normal control-flow branch, not a fault
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend transport or protocol error, propagated unmodified
    #[error("backend error: {0}")]
    Backend(#[from] redis::RedisError),

    /// Serialization/deserialization failure
    #[error("codec error: {0}")]
    Codec(String),

    /// A delete or expire was attempted on a key identity with no identifier
    #[error("storable with prefix {prefix:?} has no id")]
    MissingId {
        /// Namespace prefix of the offending key identity
        prefix: String,
    },

    /// The blocking list rotation timed out before an element arrived
    #[error("timed out waiting for an element at {key:?}")]
    Timeout {
        /// Computed storage key that was waited on
        key: String,
    },
}

impl StoreError {
    /// True for the distinguished "does not exist" branch
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<bincode::Error> for StoreError {
    fn from(e: bincode::Error) -> Self {
        StoreError::Codec(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display_and_check() {
        let err = StoreError::NotFound("c:string:missing".to_string());
        assert!(err.is_not_found());
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("c:string:missing"));
    }

    #[test]
    fn test_missing_id_display() {
        let err = StoreError::MissingId {
            prefix: "launch-data:".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("launch-data:"));
        assert!(err.to_string().contains("has no id"));
    }

    #[test]
    fn test_timeout_is_not_not_found() {
        let err = StoreError::Timeout {
            key: "c:list:queue".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_codec_from_bincode() {
        let invalid = vec![0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        let result: Result<String> = bincode::deserialize(&invalid).map_err(|e| e.into());
        assert!(matches!(result, Err(StoreError::Codec(_))));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
