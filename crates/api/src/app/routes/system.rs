use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::errors;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(
    Extension(principal): Extension<crate::context::PrincipalContext>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "principal_id": principal.principal_id().to_string(),
    }))
}

/// Fallback for unmatched method/path pairs.
pub async fn route_not_found() -> axum::response::Response {
    errors::json_message(StatusCode::NOT_FOUND, "Route not found")
}
