//! Lazily established, process-wide database handle.
//!
//! A [`ConnectionManager`] is created once at startup and shared by `Arc`
//! with every repository. The pool is built on the first
//! [`ConnectionManager::ensure_connected`] call; later calls return the same
//! handle without touching the database. Concurrent first callers await one
//! shared attempt and all receive its outcome, success or failure, so at most
//! one connection attempt is in flight. Once a failed attempt has completed
//! the next call starts a fresh one.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use futures_util::future::{BoxFuture, FutureExt as _, Shared};
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::pool::{DbPool, PoolConfig, PoolError};

/// Opens the underlying database handle.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    /// Handle shared with repositories once connected.
    type Handle: Clone + Send + Sync + 'static;

    /// Perform one connection attempt.
    async fn connect(&self) -> Result<Self::Handle, PoolError>;
}

/// PostgreSQL connector building a [`DbPool`].
#[derive(Debug, Clone)]
pub struct PgConnector {
    config: PoolConfig,
}

impl PgConnector {
    /// Connector building pools from `config`.
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Connector for PgConnector {
    type Handle = DbPool;

    async fn connect(&self) -> Result<DbPool, PoolError> {
        DbPool::new(self.config.clone()).await
    }
}

type Attempt<H> = Shared<BoxFuture<'static, Result<H, PoolError>>>;

/// Idempotent owner of the shared database handle.
pub struct ConnectionManager<C: Connector = PgConnector> {
    connector: Arc<C>,
    handle: OnceLock<C::Handle>,
    in_flight: Mutex<Option<Attempt<C::Handle>>>,
}

/// Connection manager used by the Diesel adapters.
pub type DbConnectionManager = ConnectionManager<PgConnector>;

impl ConnectionManager<PgConnector> {
    /// Manager for a PostgreSQL pool built from `config`.
    pub fn postgres(config: PoolConfig) -> Self {
        Self::new(PgConnector::new(config))
    }
}

impl<C: Connector> ConnectionManager<C> {
    /// Unconnected manager; nothing is opened until the first
    /// [`ensure_connected`](Self::ensure_connected) call.
    pub fn new(connector: C) -> Self {
        Self {
            connector: Arc::new(connector),
            handle: OnceLock::new(),
            in_flight: Mutex::new(None),
        }
    }

    /// Whether a handle has been established.
    pub fn is_connected(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Return the shared handle, connecting first if necessary.
    ///
    /// Callers arriving while an attempt is running join it rather than
    /// queueing their own, so a failure reaches every waiter after a single
    /// connect timeout.
    ///
    /// # Errors
    ///
    /// Propagates the connector's [`PoolError`] unchanged. No retry happens
    /// within a single call.
    pub async fn ensure_connected(&self) -> Result<C::Handle, PoolError> {
        if let Some(handle) = self.handle.get() {
            return Ok(handle.clone());
        }
        let attempt = {
            let mut slot = self.in_flight.lock().await;
            if let Some(handle) = self.handle.get() {
                return Ok(handle.clone());
            }
            match slot.as_ref() {
                Some(attempt) => attempt.clone(),
                None => {
                    let attempt = self.start_attempt();
                    *slot = Some(attempt.clone());
                    attempt
                }
            }
        };

        let outcome = attempt.clone().await;
        if let Ok(handle) = &outcome {
            self.handle.get_or_init(|| handle.clone());
        }
        // The handle is published before the slot clears, so later callers
        // either take the fast path or start a new attempt after a failure.
        let mut slot = self.in_flight.lock().await;
        if slot
            .as_ref()
            .is_some_and(|current| Shared::ptr_eq(current, &attempt))
        {
            *slot = None;
        }
        outcome
    }

    fn start_attempt(&self) -> Attempt<C::Handle> {
        let connector = Arc::clone(&self.connector);
        async move {
            info!("establishing database connection");
            connector.connect().await.inspect_err(|err| {
                warn!(error = %err, "database connection attempt failed");
            })
        }
        .boxed()
        .shared()
    }
}
