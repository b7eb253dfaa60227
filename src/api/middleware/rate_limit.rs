//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-client rate limiter for the classification endpoints.
///
/// # Limits
///
/// - **Rate**: one token every `1000 / per_second` milliseconds
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the service must be served with connect info.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/classify", post(classify_handler))
///     .layer(rate_limit::layer(50, 100)?);
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    anyhow::ensure!(per_second > 0, "rate limit must allow at least one request per second");

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond((1000 / per_second).max(1))
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_valid() {
        assert!(layer(50, 100).is_ok());
        assert!(layer(1000, 1).is_ok());
    }

    #[test]
    fn test_layer_rejects_zero() {
        assert!(layer(0, 100).is_err());
        assert!(layer(50, 0).is_err());
    }
}
