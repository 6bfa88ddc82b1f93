//! Posts: stored record and the body used to create or replace one.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored post. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn from_payload(id: i64, payload: PostPayload) -> Self {
        Self {
            id,
            title: payload.title,
            content: payload.content,
        }
    }
}
