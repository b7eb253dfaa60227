//! DTOs for health check and service info endpoints.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Service description returned from `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: Endpoints,
}

/// Paths of the public endpoints.
#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub classify: &'static str,
    pub classify_batch: &'static str,
}
