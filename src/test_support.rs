//! Shared helpers for in-crate tests.

use crate::config::Settings;
use crate::migration::apply_migrations;
use crate::store::connect_pool;
use sqlx::SqlitePool;

/// Fresh in-memory database with the schema applied.
pub async fn memory_pool() -> SqlitePool {
    let settings = Settings {
        database_url: "sqlite::memory:".into(),
        ..Settings::default()
    };
    let pool = connect_pool(&settings).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}
