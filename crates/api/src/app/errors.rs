use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::ValidationErrors;
use stockroom_store::StoreError;

/// `{"message": ...}` envelope shared by every error response.
pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(json!({ "message": message.into() }))).into_response()
}

/// Field violations: 400 with the full message list.
pub fn validation_error(errors: ValidationErrors) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": errors.into_messages() })),
    )
        .into_response()
}

pub fn not_found(resource: &'static str) -> axum::response::Response {
    json_message(StatusCode::NOT_FOUND, format!("{resource} not found"))
}

/// Store faults on create/update paths surface as 400.
pub fn write_error(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store failure on write path");
    json_message(StatusCode::BAD_REQUEST, err.to_string())
}

/// Store faults on read/delete paths surface as 500.
pub fn read_error(err: StoreError) -> axum::response::Response {
    tracing::error!(error = %err, "store failure on read path");
    json_message(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
