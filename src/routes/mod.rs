//! HTTP route handlers.
//!
//! A single route is registered: the root greeting. Everything else falls
//! through to Axum's defaults (404 for unmatched paths, 405 for unmatched
//! methods on a matched path).
//!
//! Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request, allowing correlation of all logs
//! within a request.

pub mod greeting;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(greeting::index))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
