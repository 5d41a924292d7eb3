use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tokio_retry::{strategy::FixedInterval, Retry};

use crate::payments::errors::StoreError;

pub async fn connect_with_retry(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, StoreError> {
    let retry_strategy = FixedInterval::from_millis(2000).take(5);

    Retry::spawn(retry_strategy, || async {
        connect(database_url, max_connections).await
    })
    .await
}

async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, StoreError> {
    let result = PgPoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(database_url)
        .await;

    match result {
        Ok(pool) => Ok(pool),
        Err(e) => {
            tracing::warn!(%e, "database connection attempt failed");
            Err(StoreError::Connection(e))
        }
    }
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Errors that mean the store itself could not be reached, as opposed to a
/// statement that failed once it got there.
pub fn is_connection_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
    )
}
