//! OpenAPI document served at `GET /openapi.json`.

use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Posts API", description = "CRUD for posts and log entries"),
    paths(
        crate::handlers::root::root,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::create_post,
        crate::handlers::posts::read_post,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post,
        crate::handlers::entries::list_entries,
        crate::handlers::entries::create_entry,
        crate::handlers::entries::read_entry,
        crate::handlers::entries::delete_entry,
        crate::handlers::users::read_user,
        crate::handlers::users::create_user,
        crate::routes::common::health,
        crate::routes::common::ready,
        crate::routes::common::version,
    ),
    components(schemas(
        crate::model::Post,
        crate::model::PostPayload,
        crate::model::Entry,
        crate::model::EntryPayload,
        crate::error::ErrorBody,
        crate::response::MessageBody,
        crate::handlers::users::UserBody,
        crate::routes::common::HealthBody,
        crate::routes::common::ReadyBody,
    )),
    tags(
        (name = "posts", description = "Blog posts"),
        (name = "entries", description = "Append-only log entries"),
        (name = "users", description = "Demo endpoints, nothing is stored"),
        (name = "ops", description = "Health, readiness and version")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for p in ["/", "/posts", "/posts/{id}", "/entries", "/entries/{id}", "/users", "/users/{user_id}", "/health", "/ready", "/version"] {
            assert!(paths.contains_key(p), "missing {}", p);
        }
        assert!(paths["/posts/{id}"].get("put").is_some());
        assert!(paths["/entries/{id}"].get("put").is_none());
    }

    #[test]
    fn entry_schema_uses_wire_name_for_type() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = &doc["components"]["schemas"]["Entry"]["properties"];
        assert!(props.get("type").is_some());
        assert!(props.get("kind").is_none());
    }
}
