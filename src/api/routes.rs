//! API route configuration.

use crate::api::handlers::{
    classify_batch_handler, classify_handler, health_handler, root_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Classification routes, rate limited in [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /classify`        - Classify a single bookmark
/// - `POST /classify/batch`  - Classify several bookmarks
pub fn classify_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(classify_handler))
        .route("/classify/batch", post(classify_batch_handler))
}

/// Unthrottled informational routes.
///
/// # Endpoints
///
/// - `GET /`        - Service name, version and endpoint map
/// - `GET /health`  - Liveness check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
