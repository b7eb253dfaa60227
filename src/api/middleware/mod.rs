//! HTTP middleware for request processing and protection.
//!
//! Provides observability, CORS, rate limiting and panic recovery middleware.

pub mod cors;
pub mod panic;
pub mod rate_limit;
pub mod tracing;
