//! Stateless routes and the OpenAPI document.

use crate::handlers::{create_user, read_user, root};
use crate::openapi::openapi_json;
use axum::{routing::get, routing::post, Router};

/// Stateless routes: greeting, demo users, OpenAPI document.
pub fn root_routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/users", post(create_user))
        .route("/users/:user_id", get(read_user))
        .route("/openapi.json", get(openapi_json))
}
