//! Request extractors: per-request database connection and rejection-mapped wrappers
//! around axum's `Json`, `Path` and `Query`.

mod db;
mod rejection;

pub use db::DbConn;
pub use rejection::{ApiJson, ApiPath, ApiQuery};
