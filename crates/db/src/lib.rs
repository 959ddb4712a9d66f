use std::time::Duration;

use bookshelf_core::error::CoreError;
use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod models;
pub mod repositories;
pub mod resolver;

pub type DbPool = sqlx::PgPool;

/// Error type for store operations that combine domain rules with SQL.
///
/// Plain repository methods return `sqlx::Error`; the resolver and the
/// catalog write path return this so validation and not-found outcomes stay
/// distinguishable from store failures.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),

    /// A unique-name conflict could not be recovered by re-reading the row.
    #[error("Unresolved conflict creating {entity} '{name}'")]
    UnresolvedConflict { entity: &'static str, name: String },
}

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Maximum open connections (default: `20`).
    pub max_connections: u32,
    /// How long a store call may wait for a free connection (default: 5s).
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolConfig {
    /// Load pool settings from `DB_MAX_CONNECTIONS` and `DB_ACQUIRE_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(defaults.max_connections);

        let acquire_timeout = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .map(|v| {
                Duration::from_secs(
                    v.parse()
                        .expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64"),
                )
            })
            .unwrap_or(defaults.acquire_timeout);

        Self {
            max_connections,
            acquire_timeout,
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Whether `err` is a unique-constraint violation.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
