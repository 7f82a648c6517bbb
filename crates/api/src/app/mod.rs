//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: store selection and the shared services struct
//! - `routes/`: the route table and the generic CRUD handler
//! - `dto.rs`: document-to-JSON response mapping
//! - `errors.rs`: the `{"message": ...}` error envelope

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(jwt_secret: String) -> Router {
    let jwt = Arc::new(stockroom_auth::Hs256JwtValidator::new(jwt_secret.into_bytes()));
    let auth_state = middleware::AuthState { jwt };

    let services = Arc::new(services::build_services().await);

    // Protected routes: require a valid bearer token.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .fallback(routes::system::route_not_found)
        .layer(axum::middleware::from_fn(middleware::request_logging))
}
