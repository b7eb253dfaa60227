//! Application layer services implementing business logic.
//!
//! This layer composes the pure building blocks in [`crate::utils`] into the
//! single operation the serving layer consumes.
//!
//! # Available Services
//!
//! - [`services::classification_service::ClassificationService`] - Bookmark
//!   category, confidence and tag suggestions

pub mod services;
