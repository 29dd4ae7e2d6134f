//! Process-wide environment registry with stack discipline
//!
//! The registry holds the one active [`Environment`] plus a stack of saved
//! ones. [`push`] installs a new environment and saves the current one;
//! [`pop`] restores the previous one and is a no-op at baseline (the stack
//! never underflows). Both run every registered change action synchronously
//! before returning, so dependent caches are current by the time the call
//! comes back.
//!
//! Mutation is meant for single-threaded lifecycle points: process startup,
//! test setup/teardown, CLI tool runs. Concurrent push/pop from multiple
//! threads is unsupported and may interleave prefixes unpredictably.

use crate::env::Environment;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

type ChangeAction = Arc<dyn Fn() + Send + Sync>;

struct Registry {
    active: Environment,
    stack: Vec<Environment>,
    actions: HashMap<String, ChangeAction>,
}

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| {
    Mutex::new(Registry {
        active: Environment::ci(),
        stack: Vec::new(),
        actions: HashMap::new(),
    })
});

/// Snapshot of the currently active environment.
pub fn active() -> Environment {
    REGISTRY.lock().active.clone()
}

/// Save the active environment on the stack and install `env`.
///
/// Every registered change action runs before this returns.
pub fn push(env: Environment) {
    let actions = {
        let mut registry = REGISTRY.lock();
        let previous = std::mem::replace(&mut registry.active, env);
        registry.stack.push(previous);
        tracing::debug!(environment = %registry.active.name, "environment pushed");
        snapshot_actions(&registry)
    };
    run_actions(&actions);
}

/// Restore the previously active environment.
///
/// A no-op at baseline; otherwise every registered change action runs
/// before this returns.
pub fn pop() {
    let actions = {
        let mut registry = REGISTRY.lock();
        let Some(previous) = registry.stack.pop() else {
            return;
        };
        registry.active = previous;
        tracing::debug!(environment = %registry.active.name, "environment popped");
        snapshot_actions(&registry)
    };
    run_actions(&actions);
}

/// Register a named action to run on every environment change.
///
/// Actions run synchronously, in no particular order, after the new
/// environment is installed.
///
/// # Panics
///
/// Panics when `name` is already registered; duplicate registration is a
/// programmer error.
pub fn on_change<F>(name: &str, action: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let mut registry = REGISTRY.lock();
    if registry.actions.contains_key(name) {
        panic!("duplicate change-action registration for {name:?}");
    }
    registry.actions.insert(name.to_string(), Arc::new(action));
}

/// Unregister a previously registered change action.
pub fn remove_on_change(name: &str) {
    REGISTRY.lock().actions.remove(name);
}

// Actions run outside the registry lock so they may read the active
// environment.
fn snapshot_actions(registry: &Registry) -> Vec<ChangeAction> {
    registry.actions.values().cloned().collect()
}

fn run_actions(actions: &[ChangeAction]) {
    for action in actions {
        action();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn named(prefix: &str) -> Environment {
        Environment {
            name: format!("test-{prefix}"),
            db_url: "redis://127.0.0.1:6379".to_string(),
            db_key_prefix: prefix.to_string(),
        }
    }

    #[test]
    fn test_push_pop_stack_discipline() {
        let _guard = crate::TEST_LOCK.lock();
        let baseline = active();
        push(named("a:"));
        assert_eq!(active().db_key_prefix, "a:");
        push(named("b:"));
        assert_eq!(active().db_key_prefix, "b:");
        pop();
        assert_eq!(active().db_key_prefix, "a:");
        pop();
        assert_eq!(active(), baseline);
    }

    #[test]
    fn test_pop_at_baseline_is_noop() {
        let _guard = crate::TEST_LOCK.lock();
        let baseline = active();
        pop();
        pop();
        assert_eq!(active(), baseline);
    }

    #[test]
    fn test_change_actions_run_synchronously() {
        let _guard = crate::TEST_LOCK.lock();
        static FIRED: AtomicUsize = AtomicUsize::new(0);
        on_change("registry-test-counter", || {
            FIRED.fetch_add(1, Ordering::SeqCst);
        });
        push(named("cb:"));
        assert_eq!(FIRED.load(Ordering::SeqCst), 1);
        pop();
        assert_eq!(FIRED.load(Ordering::SeqCst), 2);
        // a no-op pop at baseline must not fire actions
        pop();
        assert_eq!(FIRED.load(Ordering::SeqCst), 2);
        remove_on_change("registry-test-counter");
        push(named("cb2:"));
        pop();
        assert_eq!(FIRED.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_change_action_sees_new_environment() {
        let _guard = crate::TEST_LOCK.lock();
        static SEEN: Mutex<Vec<String>> = Mutex::new(Vec::new());
        on_change("registry-test-observer", || {
            SEEN.lock().push(active().db_key_prefix);
        });
        push(named("obs:"));
        pop();
        remove_on_change("registry-test-observer");
        let seen = SEEN.lock();
        assert_eq!(seen[0], "obs:");
        assert_eq!(seen[1], active().db_key_prefix);
    }

    #[test]
    #[should_panic(expected = "duplicate change-action registration")]
    fn test_duplicate_registration_panics() {
        on_change("registry-test-dup", || {});
        on_change("registry-test-dup", || {});
    }
}
