use std::future::Future;
use std::time::Duration;

pub mod task;
pub mod user;

pub use task::PostgresTaskRepository;
pub use user::PostgresUserRepository;

/// Why a bounded store call did not produce a value.
#[derive(Debug)]
pub(crate) enum StoreFailure {
    Database(sqlx::Error),
    Timeout(Duration),
}

impl StoreFailure {
    pub(crate) fn is_unique_violation(&self) -> bool {
        match self {
            StoreFailure::Database(e) => e
                .as_database_error()
                .map(|db_err| db_err.is_unique_violation())
                .unwrap_or(false),
            StoreFailure::Timeout(_) => false,
        }
    }
}

/// Await a store operation, giving up after `limit`.
pub(crate) async fn bounded<F, T>(limit: Duration, operation: F) -> Result<T, StoreFailure>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Database operation failed");
            Err(StoreFailure::Database(e))
        }
        Err(_) => {
            tracing::error!(timeout_ms = limit.as_millis(), "Database operation timed out");
            Err(StoreFailure::Timeout(limit))
        }
    }
}
