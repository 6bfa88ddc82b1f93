//! Schema bootstrap: create the `posts` and `entries` tables on startup if they are absent.

use crate::error::AppError;
use sqlx::SqlitePool;

const POSTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL
)
"#;

const ENTRIES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now')),
    type TEXT NOT NULL,
    module TEXT NOT NULL,
    content TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '',
    metadata TEXT
)
"#;

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS ix_posts_title ON posts (title)",
    "CREATE INDEX IF NOT EXISTS ix_entries_type ON entries (type)",
    "CREATE INDEX IF NOT EXISTS ix_entries_module ON entries (module)",
];

/// Idempotent; safe to call on every start.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for ddl in [POSTS_DDL, ENTRIES_DDL].into_iter().chain(INDEXES.iter().copied()) {
        tracing::debug!(sql = %ddl.trim(), "migration");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!("schema ready");
    Ok(())
}
