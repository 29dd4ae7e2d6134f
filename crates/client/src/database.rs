//! Backend connection handle
//!
//! A [`Database`] binds one [`Environment`] to a backend client: it owns the
//! parsed connection target, the environment's key prefix, and a lazily
//! created shared connection. Operations in flight keep using the handle
//! they were given, whatever the registry does afterwards.

use crate::env::Environment;
use crate::registry;
use keyspace_core::Result;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use redis::aio::{ConnectionManager, MultiplexedConnection};
use std::sync::Arc;
use std::sync::Once;
use tokio::sync::OnceCell;

/// Connection handle for one environment.
///
/// Cheap to create: the URL is parsed eagerly but no connection is made
/// until the first operation asks for one. The shared connection is a
/// multiplexed, auto-reconnecting manager; clones of it are handed to every
/// non-blocking operation.
pub struct Database {
    env: Environment,
    client: redis::Client,
    manager: OnceCell<ConnectionManager>,
}

impl Database {
    /// Open a handle for `env`. Fails only on an unparseable URL.
    pub fn open(env: &Environment) -> Result<Arc<Database>> {
        let client = redis::Client::open(env.db_url.as_str())?;
        Ok(Arc::new(Database {
            env: env.clone(),
            client,
            manager: OnceCell::new(),
        }))
    }

    /// Handle for the currently active environment.
    ///
    /// Handles are cached per environment; the cache is flushed through a
    /// registered change action, so a push/pop is reflected here by the time
    /// it returns.
    pub fn active() -> Result<Arc<Database>> {
        static CACHE: Lazy<Mutex<Option<(Environment, Arc<Database>)>>> =
            Lazy::new(|| Mutex::new(None));
        static REGISTER: Once = Once::new();
        REGISTER.call_once(|| {
            registry::on_change("active-database", || {
                *CACHE.lock() = None;
            });
        });

        let env = registry::active();
        let mut cache = CACHE.lock();
        if let Some((cached_env, db)) = cache.as_ref() {
            if *cached_env == env {
                return Ok(db.clone());
            }
        }
        let db = Database::open(&env)?;
        *cache = Some((env, db.clone()));
        Ok(db)
    }

    /// The environment this handle is bound to.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Key prefix every computed storage key starts with.
    pub fn key_prefix(&self) -> &str {
        &self.env.db_key_prefix
    }

    /// Clone of the shared managed connection, connecting on first use.
    pub async fn conn(&self) -> Result<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| async {
                tracing::debug!(url = %self.env.db_url, "connecting to backend");
                ConnectionManager::new(self.client.clone()).await
            })
            .await?;
        Ok(manager.clone())
    }

    /// Dedicated connection for commands that suspend server-side.
    ///
    /// A blocking command parked on the shared connection would stall every
    /// other caller multiplexed onto it, so each blocking call gets its own.
    pub async fn blocking_conn(&self) -> Result<MultiplexedConnection> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("environment", &self.env.name)
            .field("key_prefix", &self.env.db_key_prefix)
            .finish()
    }
}
