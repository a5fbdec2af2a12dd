//! Database connection pool management.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Errors raised while building the pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The connection string is empty or cannot be parsed.
    #[error("invalid database configuration: {0}")]
    Configuration(String),
    /// The database could not be reached during the startup probe.
    #[error("database connectivity check failed: {0}")]
    Connectivity(String),
}

/// Sizing and liveness policy applied to every pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolPolicy {
    /// Upper bound on open connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Idle connections older than this are closed.
    pub idle_timeout: Duration,
    /// Connections older than this are retired.
    pub max_lifetime: Duration,
    /// Interval between background liveness probes.
    pub health_check_period: Duration,
    /// Bound on waiting for a free connection.
    pub acquire_timeout: Duration,
    /// Bound on the startup probe.
    pub probe_timeout: Duration,
}

impl Default for PoolPolicy {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 2,
            idle_timeout: Duration::from_secs(30 * 60),
            max_lifetime: Duration::from_secs(60 * 60),
            health_check_period: Duration::from_secs(60),
            acquire_timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolPolicy {
    /// Builds sqlx pool options carrying this policy.
    #[must_use]
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct DatabasePool {
    pool: PgPool,
    monitor: Option<Arc<AbortHandle>>,
}

impl DatabasePool {
    /// Creates a new database pool from the connection string and verifies
    /// that the database answers before returning it.
    ///
    /// Connections beyond the configured minimum are opened on demand.
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    ///
    /// # Errors
    /// Returns [`PoolError::Configuration`] if the string is empty or
    /// malformed, and [`PoolError::Connectivity`] if the startup probe fails
    /// or does not finish within the probe timeout. No pool is left open in
    /// either case.
    pub async fn connect(database_url: &str) -> Result<Self, PoolError> {
        let policy = PoolPolicy::default();

        if database_url.trim().is_empty() {
            return Err(PoolError::Configuration(
                "database URL cannot be empty".to_string(),
            ));
        }

        let options = PgConnectOptions::from_str(database_url).map_err(|err| {
            PoolError::Configuration(format!("failed to parse database URL: {err}"))
        })?;

        info!(
            host = options.get_host(),
            port = options.get_port(),
            database = options.get_database().unwrap_or_default(),
            max_connections = policy.max_connections,
            min_connections = policy.min_connections,
            "Connecting to database"
        );

        let pool = policy.pool_options().connect_lazy_with(options);

        match tokio::time::timeout(policy.probe_timeout, ping(&pool)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                pool.close().await;
                return Err(PoolError::Connectivity(format!(
                    "failed to ping database on connect: {err}"
                )));
            }
            Err(_) => {
                pool.close().await;
                return Err(PoolError::Connectivity(format!(
                    "database did not answer within {:?}",
                    policy.probe_timeout
                )));
            }
        }

        let monitor = spawn_health_monitor(pool.clone(), policy.health_check_period);

        info!("Database connection pool established");

        Ok(Self {
            pool,
            monitor: Some(Arc::new(monitor.abort_handle())),
        })
    }

    /// Wraps an existing pool without probing it or starting the monitor.
    #[cfg(test)]
    pub(crate) fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            monitor: None,
        }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Stops the background probe and closes every connection.
    ///
    /// Waits for checked-out connections to be returned.
    pub async fn close(&self) {
        if let Some(monitor) = &self.monitor {
            monitor.abort();
        }
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

/// Acquires a connection and pings it.
async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    conn.ping().await
}

/// Pings the pool every `period` until the pool is closed.
fn spawn_health_monitor(pool: PgPool, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // first tick fires immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if pool.is_closed() {
                break;
            }

            match ping(&pool).await {
                Ok(()) => debug!(
                    size = pool.size(),
                    idle = pool.num_idle(),
                    "Database health probe succeeded"
                ),
                Err(err) => warn!(error = %err, "Database health probe failed"),
            }
        }
    })
}
