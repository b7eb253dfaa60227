//! Cross-origin resource sharing policy.

use tower_http::cors::CorsLayer;

/// Creates a CORS middleware allowing any origin, method and header.
///
/// The classifier is stateless and unauthenticated, so browser clients on any
/// origin may call it directly.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
