//! Router assembly.

pub mod common;
pub mod entries;
pub mod posts;
pub mod root;

pub use common::common_routes_with_ready;
pub use entries::entry_routes;
pub use posts::post_routes;
pub use root::root_routes;

use crate::error::ErrorBody;
use crate::handlers::not_found;
use crate::state::AppState;
use axum::{
    http::header,
    middleware,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application router with tracing and request body limit applied.
/// Layers added later wrap the earlier ones, so the body rewrite sees the limit's 413.
pub fn api_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(root_routes())
        .merge(common_routes_with_ready(state.clone()))
        .merge(post_routes(state.clone()))
        .merge(entry_routes(state))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(middleware::map_response(detail_for_bare_errors))
        .layer(TraceLayer::new_for_http())
}

/// Error responses produced by axum or tower-http (405, 413, ...) carry an empty or plain-text
/// body. Give them the same `{"detail": ...}` shape as `AppError`, keeping status and `Allow`.
async fn detail_for_bare_errors(resp: Response) -> Response {
    let status = resp.status();
    let is_json = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json || !(status.is_client_error() || status.is_server_error()) {
        return resp;
    }
    let detail = status.canonical_reason().unwrap_or("Error").to_string();
    let mut out = (status, Json(ErrorBody { detail })).into_response();
    if let Some(allow) = resp.headers().get(header::ALLOW) {
        out.headers_mut().insert(header::ALLOW, allow.clone());
    }
    out
}
