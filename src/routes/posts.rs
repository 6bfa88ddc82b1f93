//! Post routes: list, create, read, update, delete.

use crate::handlers::{create_post, delete_post, list_posts, read_post, update_post};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn post_routes(state: AppState) -> Router {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/:id", get(read_post).put(update_post).delete(delete_post))
        .with_state(state)
}
