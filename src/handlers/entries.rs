//! Entry handlers. Entries have no update route.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiPath, DbConn};
use crate::model::{Entry, EntryPayload};
use crate::response::{message, MessageBody};
use crate::service::EntryService;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/entries",
    tag = "entries",
    responses((status = 200, description = "All entries", body = Vec<Entry>))
)]
pub async fn list_entries(mut conn: DbConn) -> Result<Json<Vec<Entry>>, AppError> {
    Ok(Json(EntryService::list(&mut conn).await?))
}

#[utoipa::path(
    post,
    path = "/entries",
    tag = "entries",
    request_body = EntryPayload,
    responses(
        (status = 200, description = "Created entry", body = Entry),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create_entry(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EntryPayload>,
) -> Result<Json<Entry>, AppError> {
    let mut conn = DbConn::acquire(&state).await?;
    Ok(Json(EntryService::create(&mut conn, payload).await?))
}

#[utoipa::path(
    get,
    path = "/entries/{id}",
    tag = "entries",
    params(("id" = i64, Path, description = "Entry id")),
    responses(
        (status = 200, body = Entry),
        (status = 404, description = "Wpis nie istnieje", body = ErrorBody)
    )
)]
pub async fn read_entry(ApiPath(id): ApiPath<i64>, mut conn: DbConn) -> Result<Json<Entry>, AppError> {
    Ok(Json(EntryService::get(&mut conn, id).await?))
}

#[utoipa::path(
    delete,
    path = "/entries/{id}",
    tag = "entries",
    params(("id" = i64, Path, description = "Entry id")),
    responses(
        (status = 200, body = MessageBody),
        (status = 404, description = "Wpis nie istnieje", body = ErrorBody)
    )
)]
pub async fn delete_entry(ApiPath(id): ApiPath<i64>, mut conn: DbConn) -> Result<Json<MessageBody>, AppError> {
    EntryService::delete(&mut conn, id).await?;
    Ok(message("Wpis został usunięty"))
}
