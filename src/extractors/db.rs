//! Scoped connection checkout.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};
use std::ops::{Deref, DerefMut};

/// One pooled connection for the lifetime of a request. Returned to the pool on drop,
/// whichever way the handler exits.
pub struct DbConn(pub PoolConnection<Sqlite>);

impl DbConn {
    /// Check out a connection explicitly; handlers that parse a body call this after parsing
    /// so a rejected request never waits on the pool.
    pub async fn acquire(state: &AppState) -> Result<Self, AppError> {
        Ok(DbConn(state.pool.acquire().await?))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for DbConn {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        DbConn::acquire(state).await
    }
}

impl Deref for DbConn {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
