//! Handlers for health check and service info endpoints.

use axum::Json;

use crate::api::dto::health::{Endpoints, HealthResponse, ServiceInfo};

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /health`
///
/// The classifier holds no external connections, so a response at all means
/// healthy.
///
/// # Response
///
/// ```json
/// { "status": "healthy", "service": "bookmark-classifier", "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Describes the service and its endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: Endpoints {
            health: "/health",
            classify: "/classify",
            classify_batch: "/classify/batch",
        },
    })
}
