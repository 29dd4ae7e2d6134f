//! Environment: the active namespace and connection target
//!
//! An [`Environment`] names a backend to talk to and the key prefix under
//! which every computed storage key lives. Exactly one environment is active
//! at any instant (see [`crate::registry`]); loading one from configuration
//! files is a caller concern, but the two standard sources are here.

use serde::{Deserialize, Serialize};

/// One namespace + connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Human-readable environment name ("CI", "staging", ...)
    pub name: String,
    /// Backend connection URL, e.g. `redis://127.0.0.1:6379`
    pub db_url: String,
    /// Prefix prepended to every computed storage key
    pub db_key_prefix: String,
}

impl Environment {
    /// The fixed CI environment: a local backend under the `c:` prefix.
    pub fn ci() -> Self {
        Environment {
            name: "CI".to_string(),
            db_url: "redis://127.0.0.1:6379".to_string(),
            db_key_prefix: "c:".to_string(),
        }
    }

    /// Read an environment from process variables.
    ///
    /// Uses `ENVIRONMENT_NAME`, `REDIS_URL`, and `DB_KEY_PREFIX`. Unset
    /// variables yield empty fields; an empty `db_url` surfaces later as a
    /// backend error when the first connection is attempted.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Environment {
            name: var("ENVIRONMENT_NAME"),
            db_url: var("REDIS_URL"),
            db_key_prefix: var("DB_KEY_PREFIX"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::ci()
    }
}
