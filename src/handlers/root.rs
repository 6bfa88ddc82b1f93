//! Greeting and the catch-all for unknown paths.

use crate::error::AppError;
use crate::response::{message, MessageBody};
use axum::Json;

pub const GREETING: &str = "Witaj w moim API!";

/// Greeting; no side effects.
#[utoipa::path(get, path = "/", tag = "root", responses((status = 200, body = MessageBody)))]
pub async fn root() -> Json<MessageBody> {
    message(GREETING)
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}
