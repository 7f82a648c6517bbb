//! Generic CRUD handler: one implementation for every resource.
//!
//! Each request is independent and stateless: validate the payload, run the
//! gateway operation, map the outcome to a status code. Resource-specific
//! behavior enters only through the [`Resource`] descriptor.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;

use stockroom_core::Resource;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// CRUD route set for one resource: `/` (create, list) and `/:id`
/// (fetch, replace, delete).
pub fn resource_routes<R: Resource>() -> Router {
    Router::new()
        .route("/", post(create::<R>).get(list::<R>))
        .route("/:id", get(fetch::<R>).put(update::<R>).delete(remove::<R>))
}

async fn create<R: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
    Json(payload): Json<Value>,
) -> axum::response::Response {
    let fields = match R::schema().validate(&payload) {
        Ok(fields) => fields,
        Err(violations) => return errors::validation_error(violations),
    };

    match services.gateway::<R>().create(fields).await {
        Ok(doc) => (StatusCode::CREATED, Json(dto::document_to_json(&doc))).into_response(),
        Err(e) => errors::write_error(e),
    }
}

async fn list<R: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.gateway::<R>().find_all().await {
        Ok(docs) => {
            let items: Vec<Value> = docs.iter().map(dto::document_to_json).collect();
            (StatusCode::OK, Json(Value::Array(items))).into_response()
        }
        Err(e) => errors::read_error(e),
    }
}

async fn fetch<R: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.gateway::<R>().find_by_id(&id).await {
        Ok(Some(doc)) => (StatusCode::OK, Json(dto::document_to_json(&doc))).into_response(),
        Ok(None) => errors::not_found(R::DISPLAY_NAME),
        Err(e) => errors::read_error(e),
    }
}

async fn update<R: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> axum::response::Response {
    let fields = match R::schema().validate(&payload) {
        Ok(fields) => fields,
        Err(violations) => return errors::validation_error(violations),
    };

    match services.gateway::<R>().update_by_id(&id, fields).await {
        Ok(Some(doc)) => (StatusCode::OK, Json(dto::document_to_json(&doc))).into_response(),
        Ok(None) => errors::not_found(R::DISPLAY_NAME),
        Err(e) => errors::write_error(e),
    }
}

async fn remove<R: Resource>(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.gateway::<R>().delete_by_id(&id).await {
        Ok(Some(_)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": format!("{} deleted successfully", R::DISPLAY_NAME),
            })),
        )
            .into_response(),
        Ok(None) => errors::not_found(R::DISPLAY_NAME),
        Err(e) => errors::read_error(e),
    }
}
