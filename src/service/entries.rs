//! Create, read and delete for `entries`.

use crate::error::AppError;
use crate::model::{Entry, EntryPayload, EntryRow};
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqliteConnection;

pub const ENTRY_NOT_FOUND: &str = "Wpis nie istnieje";

const COLUMNS: &str = "id, timestamp, type, module, content, tags, metadata";

pub struct EntryService;

impl EntryService {
    /// Insert one entry. A missing `timestamp` is filled with the current UTC time.
    pub async fn create(conn: &mut SqliteConnection, payload: EntryPayload) -> Result<Entry, AppError> {
        let timestamp = payload.timestamp.unwrap_or_else(Utc::now);
        let sql = format!(
            "INSERT INTO entries (timestamp, type, module, content, tags, metadata) VALUES (?, ?, ?, ?, ?, ?) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row: EntryRow = sqlx::query_as(&sql)
            .bind(timestamp)
            .bind(&payload.kind)
            .bind(&payload.module)
            .bind(&payload.content)
            .bind(&payload.tags)
            .bind(payload.metadata.as_ref().map(Json))
            .fetch_one(&mut *conn)
            .await?;
        tracing::info!(id = row.id, kind = %row.kind, module = %row.module, "entry created");
        Ok(row.into())
    }

    pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Entry, AppError> {
        let sql = format!("SELECT {} FROM entries WHERE id = ?", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<EntryRow> = sqlx::query_as(&sql).bind(id).fetch_optional(&mut *conn).await?;
        row.map(Entry::from)
            .ok_or_else(|| AppError::NotFound(ENTRY_NOT_FOUND.into()))
    }

    /// All entries in insertion order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Entry>, AppError> {
        let sql = format!("SELECT {} FROM entries ORDER BY id", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<EntryRow> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
        Ok(rows.into_iter().map(Entry::from).collect())
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM entries WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&mut *conn).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(ENTRY_NOT_FOUND.into()));
        }
        tracing::info!(id, "entry deleted");
        Ok(())
    }
}
