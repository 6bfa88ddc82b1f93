//! CRUD for `posts`.

use crate::error::AppError;
use crate::model::{Post, PostPayload};
use sqlx::SqliteConnection;

pub const POST_NOT_FOUND: &str = "Post nie istnieje";

pub struct PostService;

impl PostService {
    pub async fn create(conn: &mut SqliteConnection, payload: PostPayload) -> Result<Post, AppError> {
        let sql = "INSERT INTO posts (title, content) VALUES (?, ?) RETURNING id, title, content";
        tracing::debug!(sql = %sql, "query");
        let post: Post = sqlx::query_as(sql)
            .bind(&payload.title)
            .bind(&payload.content)
            .fetch_one(&mut *conn)
            .await?;
        tracing::info!(id = post.id, "post created");
        Ok(post)
    }

    pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Post, AppError> {
        let sql = "SELECT id, title, content FROM posts WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as(sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.into()))
    }

    /// All posts in insertion order.
    pub async fn list(conn: &mut SqliteConnection) -> Result<Vec<Post>, AppError> {
        let sql = "SELECT id, title, content FROM posts ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        Ok(sqlx::query_as(sql).fetch_all(&mut *conn).await?)
    }

    /// Overwrite `title` and `content`; `id` is kept.
    pub async fn update(conn: &mut SqliteConnection, id: i64, payload: PostPayload) -> Result<Post, AppError> {
        let sql = "UPDATE posts SET title = ?, content = ? WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql)
            .bind(&payload.title)
            .bind(&payload.content)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(POST_NOT_FOUND.into()));
        }
        Ok(Post::from_payload(id, payload))
    }

    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<(), AppError> {
        let sql = "DELETE FROM posts WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(sql).bind(id).execute(&mut *conn).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(POST_NOT_FOUND.into()));
        }
        tracing::info!(id, "post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_pool;

    fn payload(title: &str, content: &str) -> PostPayload {
        PostPayload {
            title: title.into(),
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let created = PostService::create(&mut conn, payload("Hello", "World")).await.unwrap();
        let fetched = PostService::get(&mut conn, created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.content, "World");
    }

    #[tokio::test]
    async fn update_keeps_id() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let created = PostService::create(&mut conn, payload("a", "b")).await.unwrap();
        let updated = PostService::update(&mut conn, created.id, payload("c", "d")).await.unwrap();
        assert_eq!(updated.id, created.id);
        let fetched = PostService::get(&mut conn, created.id).await.unwrap();
        assert_eq!(fetched.title, "c");
        assert_eq!(fetched.content, "d");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let err = PostService::update(&mut conn, 99999, payload("x", "y")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let created = PostService::create(&mut conn, payload("a", "b")).await.unwrap();
        PostService::delete(&mut conn, created.id).await.unwrap();
        let err = PostService::get(&mut conn, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == POST_NOT_FOUND));
        let err = PostService::delete(&mut conn, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_returns_every_post_in_insertion_order() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        for i in 0..4 {
            PostService::create(&mut conn, payload(&format!("t{}", i), "c")).await.unwrap();
        }
        let posts = PostService::list(&mut conn).await.unwrap();
        assert_eq!(posts.len(), 4);
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["t0", "t1", "t2", "t3"]);
        let mut ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let pool = memory_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let first = PostService::create(&mut conn, payload("a", "b")).await.unwrap();
        PostService::delete(&mut conn, first.id).await.unwrap();
        let second = PostService::create(&mut conn, payload("a", "b")).await.unwrap();
        assert!(second.id > first.id);
    }
}
