//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod batch;
pub mod classify;
pub mod fallback;
pub mod health;

pub use batch::classify_batch_handler;
pub use classify::classify_handler;
pub use fallback::not_found_handler;
pub use health::{health_handler, root_handler};
