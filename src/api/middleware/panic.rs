//! Converts handler panics into `500 Internal Server Error` responses.

use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::AppError;

/// Panic-to-response conversion used by [`layer`].
pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Creates a middleware catching panics raised while handling a request.
///
/// Classification has no expected failure modes, so a panic is a bug: it is
/// logged at `ERROR` and answered with the standard `internal_error` body
/// instead of dropping the connection.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");

    AppError::internal("Classification failed", json!({})).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_handle_panic_string_payload() {
        let response = handle_panic(Box::new("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_handle_panic_str_payload() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_handle_panic_opaque_payload() {
        let response = handle_panic(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
