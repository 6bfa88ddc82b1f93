//! Entry routes: list, create, read, delete.

use crate::handlers::{create_entry, delete_entry, list_entries, read_entry};
use crate::state::AppState;
use axum::{routing::get, Router};

/// No PUT: entries are never edited after creation.
pub fn entry_routes(state: AppState) -> Router {
    Router::new()
        .route("/entries", get(list_entries).post(create_entry))
        .route("/entries/:id", get(read_entry).delete(delete_entry))
        .with_state(state)
}
