//! Hash family operations against a live backend

mod common;

use common::{test_store, unique};
use keyspace::HashKey;

#[tokio::test]
async fn test_hash_field_lifecycle() {
    let Some(store) = test_store().await else {
        return;
    };
    let key = HashKey(unique("fields"));

    let err = store.hash_get(&key, "nonexistent").await.unwrap_err();
    assert!(err.is_not_found(), "missing field should be NotFound");

    store.hash_set(&key, "voice", "aria").await.unwrap();
    let value = store.hash_get(&key, "voice").await.unwrap();
    assert_eq!(value, "aria");

    store.hash_set(&key, "rate", "1.25").await.unwrap();

    let all = store.hash_get_all(&key).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all["voice"], "aria");
    assert_eq!(all["rate"], "1.25");

    let mut names = store.hash_field_names(&key).await.unwrap();
    names.sort();
    assert_eq!(names, vec!["rate", "voice"]);

    store.hash_remove(&key, "voice").await.unwrap();
    let err = store.hash_get(&key, "voice").await.unwrap_err();
    assert!(err.is_not_found(), "removed field should be NotFound");

    store.delete(&key).await.unwrap();
}
