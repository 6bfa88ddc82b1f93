//! Connection pool setup. Handlers never hold the pool directly; they check out one
//! connection per request through [`crate::extractors::DbConn`].

use crate::config::Settings;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

/// Open the pool for `settings.database_url`, creating the database file if it does not exist.
/// In-memory databases get a single connection that is never recycled, otherwise each
/// new connection would see an empty database.
pub async fn connect_pool(settings: &Settings) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&settings.database_url)?.create_if_missing(true);
    let pool = if settings.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(opts)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(settings.max_connections)
            .connect_with(opts)
            .await?
    };
    tracing::info!(url = %settings.database_url, "database pool ready");
    Ok(pool)
}

/// Round-trip a trivial query; used by the readiness probe.
pub async fn ping(pool: &SqlitePool) -> bool {
    sqlx::query("SELECT 1").fetch_optional(pool).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_pool_keeps_state_between_checkouts() {
        let settings = Settings {
            database_url: "sqlite::memory:".into(),
            ..Settings::default()
        };
        let pool = connect_pool(&settings).await.unwrap();
        sqlx::query("CREATE TABLE t (x INTEGER)").execute(&pool).await.unwrap();
        sqlx::query("INSERT INTO t (x) VALUES (1)").execute(&pool).await.unwrap();
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM t").fetch_one(&pool).await.unwrap();
        assert_eq!(n, 1);
        assert!(ping(&pool).await);
    }

    #[tokio::test]
    async fn ping_fails_on_closed_pool() {
        let settings = Settings {
            database_url: "sqlite::memory:".into(),
            ..Settings::default()
        };
        let pool = connect_pool(&settings).await.unwrap();
        pool.close().await;
        assert!(!ping(&pool).await);
    }
}
