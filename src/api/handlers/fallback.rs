//! Handler for requests that match no route.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Answers unknown paths with the standard error body.
///
/// # Response
///
/// `404 Not Found`
///
/// ```json
/// { "error": { "code": "not_found", "message": "Route not found", "details": { "path": "/nope" } } }
/// ```
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}
