//! List family operations against a live backend

mod common;

use common::{test_store, unique};
use keyspace::{ListEnd, ListKey, StoreError};
use std::time::Duration;

#[tokio::test]
async fn test_never_written_list_is_empty() {
    let Some(store) = test_store().await else {
        return;
    };
    let key = ListKey(unique("empty-list"));

    let elements = store.list_range(&key, 0, -1).await.unwrap();
    assert!(elements.is_empty(), "never-written list should be empty");
}

#[tokio::test]
async fn test_push_fetch_remove_occurrences() {
    let Some(store) = test_store().await else {
        return;
    };
    let key = ListKey(unique("push-remove"));

    store.push_left(&key, &["|"]).await.unwrap();
    store.push_left(&key, &["a", "b", "c"]).await.unwrap();
    store.push_right(&key, &["a", "b", "c"]).await.unwrap();

    let before = store.list_range(&key, 0, -1).await.unwrap();
    assert_eq!(before, vec!["c", "b", "a", "|", "a", "b", "c"]);

    store.remove_occurrences(&key, 0, "b").await.unwrap();
    let after = store.list_range(&key, 0, -1).await.unwrap();
    assert_eq!(after, vec!["c", "a", "|", "a", "c"]);

    store.delete(&key).await.unwrap();
}

#[tokio::test]
async fn test_move_one_between_lists() {
    let Some(store) = test_store().await else {
        return;
    };
    let src = ListKey(unique("move-src"));
    let dst = ListKey(unique("move-dst"));

    let err = store
        .move_one(&src, &dst, ListEnd::Right, ListEnd::Left)
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "empty source should fail immediately");

    store.push_right(&src, &["a", "b", "c"]).await.unwrap();

    let moved = store
        .move_one(&src, &dst, ListEnd::Right, ListEnd::Left)
        .await
        .unwrap();
    assert_eq!(moved, "c");
    let moved = store
        .move_one(&src, &dst, ListEnd::Right, ListEnd::Left)
        .await
        .unwrap();
    assert_eq!(moved, "b");

    let remaining = store.list_range(&src, 0, -1).await.unwrap();
    assert_eq!(remaining, vec!["a"]);
    let received = store.list_range(&dst, 0, -1).await.unwrap();
    assert_eq!(received, vec!["b", "c"]);

    store.delete(&src).await.unwrap();
    store.delete(&dst).await.unwrap();
}

#[tokio::test]
async fn test_rotate_blocking_delivers_late_push() {
    let Some(store) = test_store().await else {
        return;
    };
    let key = ListKey(unique("rotate"));

    let pusher_store = store.clone();
    let pusher_key = key.clone();
    let pusher = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        pusher_store
            .push_right(&pusher_key, &["a", "b", "c"])
            .await
            .unwrap();
    });

    let element = store
        .rotate_blocking(&key, ListEnd::Right, Duration::from_secs(2))
        .await
        .unwrap();
    assert_eq!(element, "c", "the tail element should arrive first");

    pusher.await.unwrap();

    let remaining = store.list_range(&key, 0, -1).await.unwrap();
    assert_eq!(
        remaining,
        vec!["c", "a", "b"],
        "the popped element must be re-queued at the opposite end"
    );

    store.delete(&key).await.unwrap();
}

#[tokio::test]
async fn test_rotate_blocking_times_out_distinctly() {
    let Some(store) = test_store().await else {
        return;
    };
    let key = ListKey(unique("rotate-timeout"));

    let err = store
        .rotate_blocking(&key, ListEnd::Left, Duration::from_millis(500))
        .await
        .unwrap_err();
    assert!(
        matches!(err, StoreError::Timeout { .. }),
        "expected Timeout, got {err:?}"
    );
    assert!(!err.is_not_found(), "a timeout is not a missing key");
}
