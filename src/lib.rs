//! Posts API: CRUD REST backend for posts and log entries.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use model::{Entry, EntryPayload, Post, PostPayload};
pub use routes::{api_router, common_routes_with_ready, entry_routes, post_routes, root_routes};
pub use service::{EntryService, PostService};
pub use state::AppState;
pub use store::connect_pool;
