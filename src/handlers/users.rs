//! Demo user routes. Nothing is persisted; responses are derived from the request.

use crate::error::ErrorBody;
use crate::extractors::{ApiPath, ApiQuery};
use crate::response::{message, MessageBody};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserBody {
    pub user_id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateUserQuery {
    pub name: String,
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(("user_id" = i64, Path, description = "User id")),
    responses(
        (status = 200, body = UserBody),
        (status = 422, description = "Non-integer id", body = ErrorBody)
    )
)]
pub async fn read_user(ApiPath(user_id): ApiPath<i64>) -> Json<UserBody> {
    Json(UserBody {
        user_id,
        name: format!("User{}", user_id),
    })
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    params(CreateUserQuery),
    responses(
        (status = 200, body = MessageBody),
        (status = 422, description = "Missing name", body = ErrorBody)
    )
)]
pub async fn create_user(ApiQuery(query): ApiQuery<CreateUserQuery>) -> Json<MessageBody> {
    message(format!("Użytkownik {} został utworzony", query.name))
}
