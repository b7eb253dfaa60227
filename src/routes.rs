//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                - Service info (public)
//! - `GET  /health`          - Health check (public)
//! - `POST /classify`        - Single classification (rate limited)
//! - `POST /classify/batch`  - Batch classification (rate limited)
//! - anything else            - `404 not_found` error body
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500 internal_error` responses
//! - **CORS** - Any origin may call the API
//! - **Rate limiting** - Per-IP token bucket on classification routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, panic, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let classify_router = api::routes::classify_routes().layer(rate_limit::layer(
        config.rate_limit_per_second,
        config.rate_limit_burst,
    )?);

    let router = Router::new()
        .merge(api::routes::public_routes())
        .merge(classify_router)
        .fallback(api::handlers::not_found_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(panic::layer())
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
