//! Post handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiPath, DbConn};
use crate::model::{Post, PostPayload};
use crate::response::{message, MessageBody};
use crate::service::PostService;
use crate::state::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses((status = 200, description = "All posts", body = Vec<Post>))
)]
pub async fn list_posts(mut conn: DbConn) -> Result<Json<Vec<Post>>, AppError> {
    Ok(Json(PostService::list(&mut conn).await?))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = PostPayload,
    responses(
        (status = 200, description = "Created post", body = Post),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PostPayload>,
) -> Result<Json<Post>, AppError> {
    let mut conn = DbConn::acquire(&state).await?;
    Ok(Json(PostService::create(&mut conn, payload).await?))
}

#[utoipa::path(
    get,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, body = Post),
        (status = 404, description = "Post nie istnieje", body = ErrorBody)
    )
)]
pub async fn read_post(ApiPath(id): ApiPath<i64>, mut conn: DbConn) -> Result<Json<Post>, AppError> {
    Ok(Json(PostService::get(&mut conn, id).await?))
}

#[utoipa::path(
    put,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    request_body = PostPayload,
    responses(
        (status = 200, description = "Updated post", body = Post),
        (status = 404, description = "Post nie istnieje", body = ErrorBody),
        (status = 422, description = "Malformed body", body = ErrorBody)
    )
)]
pub async fn update_post(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PostPayload>,
) -> Result<Json<Post>, AppError> {
    let mut conn = DbConn::acquire(&state).await?;
    Ok(Json(PostService::update(&mut conn, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, body = MessageBody),
        (status = 404, description = "Post nie istnieje", body = ErrorBody)
    )
)]
pub async fn delete_post(ApiPath(id): ApiPath<i64>, mut conn: DbConn) -> Result<Json<MessageBody>, AppError> {
    PostService::delete(&mut conn, id).await?;
    Ok(message("Post został usunięty"))
}
